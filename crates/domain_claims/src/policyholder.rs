//! Policyholder entity

use serde::{Deserialize, Serialize};

use core_kernel::{PolicyholderId, Record};
use crate::validation::{require_non_empty, require_non_negative, ValidationError};

/// A person who owns policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PolicyholderData")]
pub struct Policyholder {
    id: PolicyholderId,
    name: String,
    age: i32,
}

/// Unvalidated policyholder fields, as they arrive on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyholderData {
    pub id: PolicyholderId,
    pub name: String,
    pub age: i32,
}

impl Policyholder {
    /// Creates a policyholder, rejecting an empty name or a negative age
    pub fn new(
        id: PolicyholderId,
        name: impl Into<String>,
        age: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        require_non_empty("name", &name)?;
        require_non_negative("age", age)?;

        Ok(Self { id, name, age })
    }

    pub fn id(&self) -> PolicyholderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl TryFrom<PolicyholderData> for Policyholder {
    type Error = ValidationError;

    fn try_from(data: PolicyholderData) -> Result<Self, Self::Error> {
        Policyholder::new(data.id, data.name, data.age)
    }
}

impl Record for Policyholder {
    type Id = PolicyholderId;
    const ENTITY: &'static str = "Policyholder";

    fn id(&self) -> PolicyholderId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_policyholder() {
        let holder = Policyholder::new(PolicyholderId::new(1), "Ana", 30).unwrap();
        assert_eq!(holder.id(), PolicyholderId::new(1));
        assert_eq!(holder.name(), "Ana");
        assert_eq!(holder.age(), 30);
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let result: Result<Policyholder, _> =
            serde_json::from_str(r#"{"id": 1, "name": "", "age": 30}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn test_deserialize_rejects_negative_age() {
        let result: Result<Policyholder, _> =
            serde_json::from_str(r#"{"id": 1, "name": "Ana", "age": -4}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_flat_fields() {
        let holder = Policyholder::new(PolicyholderId::new(1), "Ana", 30).unwrap();
        let json = serde_json::to_value(&holder).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Ana", "age": 30}));
    }
}
