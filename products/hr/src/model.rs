use entity::employees;
use serde::{Deserialize, Serialize};

pub type EmployeeId = i64;

/// A directory entry. Serializes as `{"id","name","department"}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
        }
    }
}

impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            department: model.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_exactly_three_fields() {
        let value = serde_json::to_value(Employee::new(1, "John Doe", "IT")).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "John Doe", "department": "IT"}));
        assert_eq!(
            serde_json::to_string(&Employee::new(1, "John Doe", "IT")).unwrap(),
            r#"{"id":1,"name":"John Doe","department":"IT"}"#
        );
    }

    #[test]
    fn converts_from_entity_model() {
        let model = employees::Model {
            id: 7,
            name: "Ada Lovelace".into(),
            department: "R&D".into(),
        };
        assert_eq!(Employee::from(model), Employee::new(7, "Ada Lovelace", "R&D"));
    }
}
