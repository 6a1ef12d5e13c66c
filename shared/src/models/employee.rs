//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee transfer object
///
/// Every field is optional at the API boundary: `id` is absent on creation and
/// assigned by the store, `name` and `salary` are taken as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: i64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            salary: Some(salary),
        }
    }

    /// Same fields, different identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Inclusive salary bounds (`?min=&max=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_id() {
        let emp: Employee = serde_json::from_str(r#"{"name":"Alice","salary":50000}"#).unwrap();
        assert_eq!(emp.id, None);
        assert_eq!(emp.name.as_deref(), Some("Alice"));
        assert_eq!(emp.salary, Some(50000));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let emp: Employee = serde_json::from_str("{}").unwrap();
        assert_eq!(emp, Employee::default());
    }

    #[test]
    fn test_serialize_keeps_all_fields() {
        let json = serde_json::to_value(Employee::new("Bob", 90000)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": null, "name": "Bob", "salary": 90000})
        );
    }

    #[test]
    fn test_salary_range_requires_both_bounds() {
        let range: SalaryRange = serde_json::from_str(r#"{"min":60000,"max":100000}"#).unwrap();
        assert_eq!(range, SalaryRange { min: 60000, max: 100000 });

        assert!(serde_json::from_str::<SalaryRange>(r#"{"max":100000}"#).is_err());
        assert!(serde_json::from_str::<SalaryRange>(r#"{"min":"abc","max":1}"#).is_err());
    }
}
