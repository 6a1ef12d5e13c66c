//! 类型转换模块
//!
//! 数据库模型 (db::models) 与 API 传输模型 (shared::models) 之间的逐字段拷贝

use crate::db::models as db;
use shared::models as api;

// ============ Employee ============

impl From<db::Employee> for api::Employee {
    fn from(e: db::Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            salary: e.salary,
        }
    }
}

impl From<api::Employee> for db::Employee {
    fn from(e: api::Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            salary: e.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_fields() {
        let original = api::Employee::new("Alice", 50000).with_id("1");
        let entity: db::Employee = original.clone().into();
        assert_eq!(entity.id.as_deref(), Some("1"));

        let back: api::Employee = entity.into();
        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_with_absent_fields() {
        let original = api::Employee::default();
        let back: api::Employee = db::Employee::from(original.clone()).into();
        assert_eq!(back, original);
    }
}
