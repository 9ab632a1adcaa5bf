//! Permission and permission group models.
//!
//! Both are plain immutable data. Consistency between a permission's `group`
//! and a group's `permissions` list is checked when a catalog is built.

use crate::ids::{GroupId, PermissionId};
use serde::{Deserialize, Serialize};

/// An atomic capability an action requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub name: String,
    pub description: String,
    /// Owning group; the source of truth for membership.
    pub group: GroupId,
}

impl Permission {
    pub fn new(
        id: PermissionId,
        group: GroupId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            group,
        }
    }
}

/// A named cluster of permissions representing one functional area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGroup {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    /// Member permission ids, in display order.
    pub permissions: Vec<PermissionId>,
}

impl PermissionGroup {
    pub fn contains(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p.as_str() == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students_group() -> PermissionGroup {
        PermissionGroup {
            id: GroupId::new("students").unwrap(),
            name: "Manage Students".to_string(),
            description: "Student records".to_string(),
            permissions: vec![
                PermissionId::new("students.view").unwrap(),
                PermissionId::new("students.edit").unwrap(),
            ],
        }
    }

    #[test]
    fn test_group_contains() {
        let group = students_group();
        assert!(group.contains("students.view"));
        assert!(!group.contains("students.delete"));
        assert!(!group.contains(""));
    }

    #[test]
    fn test_permission_serialize() {
        let permission = Permission::new(
            PermissionId::new("students.view").unwrap(),
            GroupId::new("students").unwrap(),
            "View students",
            "See the student list",
        );
        let serialized = serde_json::to_string(&permission).unwrap();
        assert!(serialized.contains(r#""id":"students.view""#));
        assert!(serialized.contains(r#""group":"students""#));
    }
}
