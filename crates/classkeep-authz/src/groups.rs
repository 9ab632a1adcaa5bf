//! The group registry: functional areas and their member permissions.

use classkeep_core::{CatalogError, CatalogResult};
use classkeep_models::{GroupId, PermissionGroup, PermissionId};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: Vec<PermissionGroup>,
    index: HashMap<GroupId, usize>,
    owners: HashMap<PermissionId, GroupId>,
}

impl GroupRegistry {
    /// Builds a registry, keeping the given order.
    ///
    /// Fails on duplicate group ids and on a permission listed twice within one
    /// group. Cross-checks against the catalog happen in
    /// [`crate::validate::check_consistency`].
    pub fn new(groups: Vec<PermissionGroup>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(groups.len());
        let mut owners = HashMap::new();

        for (position, group) in groups.iter().enumerate() {
            if index.insert(group.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateGroup(group.id.to_string()));
            }

            let mut seen = HashSet::with_capacity(group.permissions.len());
            for member in &group.permissions {
                if !seen.insert(member) {
                    return Err(CatalogError::DuplicateGroupMember {
                        group: group.id.to_string(),
                        permission: member.to_string(),
                    });
                }
                owners
                    .entry(member.clone())
                    .or_insert_with(|| group.id.clone());
            }
        }

        Ok(Self {
            groups,
            index,
            owners,
        })
    }

    /// All groups in registry order.
    pub fn list_groups(&self) -> &[PermissionGroup] {
        &self.groups
    }

    pub fn find(&self, group_id: &str) -> Option<&PermissionGroup> {
        self.index.get(group_id).map(|&position| &self.groups[position])
    }

    /// Member permission ids of a group; empty for an unknown group.
    pub fn member_permissions(&self, group_id: &str) -> &[PermissionId] {
        self.find(group_id)
            .map(|group| group.permissions.as_slice())
            .unwrap_or(&[])
    }

    /// The group whose member list contains `permission_id`.
    pub fn group_of(&self, permission_id: &str) -> Option<&GroupId> {
        self.owners.get(permission_id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, members: &[&str]) -> PermissionGroup {
        PermissionGroup {
            id: GroupId::new(id).unwrap(),
            name: id.to_string(),
            description: String::new(),
            permissions: members
                .iter()
                .map(|m| PermissionId::new(*m).unwrap())
                .collect(),
        }
    }

    #[test]
    fn test_member_permissions() {
        let registry = GroupRegistry::new(vec![
            group("students", &["students.view", "students.edit"]),
            group("events", &["events.view"]),
        ])
        .unwrap();

        let members: Vec<&str> = registry
            .member_permissions("students")
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(members, vec!["students.view", "students.edit"]);
        assert!(registry.member_permissions("finances").is_empty());
    }

    #[test]
    fn test_group_of() {
        let registry = GroupRegistry::new(vec![group("events", &["events.view"])]).unwrap();
        assert_eq!(registry.group_of("events.view").unwrap(), "events");
        assert!(registry.group_of("events.edit").is_none());
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let result = GroupRegistry::new(vec![group("events", &[]), group("events", &[])]);
        assert!(matches!(result, Err(CatalogError::DuplicateGroup(id)) if id == "events"));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let result = GroupRegistry::new(vec![group("events", &["events.view", "events.view"])]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateGroupMember { group, .. }) if group == "events"
        ));
    }

    #[test]
    fn test_unknown_group_lookup() {
        let registry = GroupRegistry::default();
        assert!(registry.find("students").is_none());
        assert!(registry.is_empty());
    }
}
