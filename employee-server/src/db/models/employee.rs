//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee row as read back from SurrealDB
///
/// `id` is the record key of the `employee` table, without the table prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
}

/// Write payload: the stored fields without the identifier
///
/// The record is addressed through its id, so a payload can never move or
/// rename a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
}

impl Employee {
    /// Split into the identifier and the write payload
    pub fn into_parts(self) -> (Option<String>, EmployeeData) {
        (
            self.id,
            EmployeeData {
                name: self.name,
                salary: self.salary,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_parts() {
        let emp = Employee {
            id: Some("abc".into()),
            name: Some("Alice".into()),
            salary: Some(50000),
        };
        let (id, data) = emp.into_parts();
        assert_eq!(id.as_deref(), Some("abc"));
        assert_eq!(data.name.as_deref(), Some("Alice"));
        assert_eq!(data.salary, Some(50000));
    }

    #[test]
    fn test_data_skips_absent_fields() {
        let data = EmployeeData {
            name: None,
            salary: Some(1),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({"salary": 1}));
    }
}
