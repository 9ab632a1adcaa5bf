//! Serialized catalog definitions.
//!
//! A [`CatalogDefinition`] is the on-disk form of a permission catalog: flat
//! lists of groups and permissions plus authored role defaults. Field lengths
//! are checked here with `validator`; ids and cross references are checked
//! when the definition is turned into a live catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CatalogDefinition {
    #[validate(nested)]
    pub groups: Vec<GroupDefinition>,
    #[validate(nested)]
    pub permissions: Vec<PermissionDefinition>,
    /// Authored defaults keyed by role tag. `admin` is always computed and must
    /// not appear here.
    #[serde(default)]
    pub role_defaults: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GroupDefinition {
    pub id: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PermissionDefinition {
    pub id: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: String,
    pub group: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permission(name: &str) -> PermissionDefinition {
        PermissionDefinition {
            id: "students.view".to_string(),
            name: name.to_string(),
            description: String::new(),
            group: "students".to_string(),
        }
    }

    #[test]
    fn test_permission_definition_validation() {
        assert!(permission("View students").validate().is_ok());
        assert!(permission("").validate().is_err());
        assert!(permission(&"x".repeat(101)).validate().is_err());
    }

    #[test]
    fn test_group_description_too_long() {
        let group = GroupDefinition {
            id: "students".to_string(),
            name: "Manage Students".to_string(),
            description: "x".repeat(501),
            permissions: vec![],
        };
        assert!(group.validate().is_err());
    }

    #[test]
    fn test_nested_validation() {
        let definition = CatalogDefinition {
            groups: vec![],
            permissions: vec![permission("")],
            role_defaults: BTreeMap::new(),
        };
        assert!(definition.validate().is_err());
    }

    #[test]
    fn test_definition_deserialize_defaults() {
        let json = r#"{
            "groups": [{"id": "students", "name": "Students", "permissions": ["students.view"]}],
            "permissions": [{"id": "students.view", "name": "View", "group": "students"}]
        }"#;
        let definition: CatalogDefinition = serde_json::from_str(json).unwrap();
        assert!(definition.role_defaults.is_empty());
        assert_eq!(definition.groups[0].description, "");
        assert!(definition.validate().is_ok());
    }
}
