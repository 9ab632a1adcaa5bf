//! Load-time consistency checks between catalog, groups, defaults and policies.

use crate::catalog::PermissionCatalog;
use crate::defaults::RoleDefaults;
use crate::groups::GroupRegistry;
use crate::policy::PolicyTable;
use classkeep_core::{CatalogError, CatalogResult};

/// Checks every cross reference and returns the first violation found.
///
/// - every permission's group exists and lists it
/// - every group has members, each a catalog permission owned by that group
/// - every authored default is a catalog permission
/// - every restricted group in the policy table exists
pub fn check_consistency(
    catalog: &PermissionCatalog,
    groups: &GroupRegistry,
    defaults: &RoleDefaults,
    policies: &PolicyTable,
) -> CatalogResult<()> {
    for permission in catalog.list_all() {
        let Some(group) = groups.find(permission.group.as_str()) else {
            return Err(CatalogError::UnknownGroup {
                permission: permission.id.to_string(),
                group: permission.group.to_string(),
            });
        };
        if !group.contains(permission.id.as_str()) {
            return Err(CatalogError::MissingGroupMember {
                group: group.id.to_string(),
                permission: permission.id.to_string(),
            });
        }
    }

    for group in groups.list_groups() {
        if group.permissions.is_empty() {
            return Err(CatalogError::EmptyGroup(group.id.to_string()));
        }
        for member in &group.permissions {
            match catalog.find(member.as_str()) {
                Some(permission) if permission.group == group.id => {}
                _ => {
                    return Err(CatalogError::GroupMemberMismatch {
                        group: group.id.to_string(),
                        permission: member.to_string(),
                    });
                }
            }
        }
    }

    for (role, ids) in defaults.authored() {
        if let Some(unknown) = ids.iter().find(|id| !catalog.contains(id.as_str())) {
            return Err(CatalogError::UnknownDefaultPermission {
                role: role.to_string(),
                permission: unknown.to_string(),
            });
        }
    }

    for (role, policy) in policies.iter() {
        if let Some(unknown) = policy
            .restricted_groups
            .iter()
            .find(|group| groups.find(group.as_str()).is_none())
        {
            return Err(CatalogError::UnknownRestrictedGroup {
                role: role.to_string(),
                group: unknown.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classkeep_models::{GroupId, Permission, PermissionGroup, PermissionId, Role};
    use std::collections::{BTreeMap, HashMap};

    fn permission(id: &str, group: &str) -> Permission {
        Permission::new(
            PermissionId::new(id).unwrap(),
            GroupId::new(group).unwrap(),
            id,
            "",
        )
    }

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

    fn check(permissions: Vec<Permission>, groups: Vec<PermissionGroup>) -> CatalogResult<()> {
        let catalog = PermissionCatalog::new(permissions)?;
        let registry = GroupRegistry::new(groups)?;
        let defaults = RoleDefaults::new(&catalog, HashMap::new());
        check_consistency(&catalog, &registry, &defaults, &PolicyTable::new(BTreeMap::new()))
    }

    #[test]
    fn test_consistent_catalog() {
        let result = check(
            vec![permission("events.view", "events")],
            vec![group("events", &["events.view"])],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_group_rejected() {
        let result = check(
            vec![permission("events.view", "events")],
            vec![group("events", &["events.view"]), group("library", &[])],
        );
        assert!(matches!(result, Err(CatalogError::EmptyGroup(group)) if group == "library"));
    }

    #[test]
    fn test_permission_with_unknown_group() {
        let result = check(vec![permission("events.view", "events")], vec![]);
        assert!(matches!(result, Err(CatalogError::UnknownGroup { .. })));
    }

    #[test]
    fn test_permission_missing_from_group_list() {
        let result = check(
            vec![
                permission("events.view", "events"),
                permission("events.edit", "events"),
            ],
            vec![group("events", &["events.view"])],
        );
        assert!(matches!(
            result,
            Err(CatalogError::MissingGroupMember { permission, .. }) if permission == "events.edit"
        ));
    }

    #[test]
    fn test_group_lists_foreign_permission() {
        let result = check(
            vec![
                permission("events.view", "events"),
                permission("grades.view", "grades"),
            ],
            vec![
                group("events", &["events.view", "grades.view"]),
                group("grades", &["grades.view"]),
            ],
        );
        assert!(matches!(
            result,
            Err(CatalogError::GroupMemberMismatch { group, .. }) if group == "events"
        ));
    }

    #[test]
    fn test_group_lists_unknown_permission() {
        let result = check(
            vec![permission("events.view", "events")],
            vec![group("events", &["events.view", "events.edit"])],
        );
        assert!(matches!(result, Err(CatalogError::GroupMemberMismatch { .. })));
    }

    #[test]
    fn test_unknown_default_permission() {
        let catalog = PermissionCatalog::new(vec![permission("events.view", "events")]).unwrap();
        let registry = GroupRegistry::new(vec![group("events", &["events.view"])]).unwrap();
        let mut authored = HashMap::new();
        authored.insert(Role::Volunteer, vec![PermissionId::new("events.edit").unwrap()]);
        let defaults = RoleDefaults::new(&catalog, authored);

        let result = check_consistency(
            &catalog,
            &registry,
            &defaults,
            &PolicyTable::new(BTreeMap::new()),
        );
        assert!(matches!(
            result,
            Err(CatalogError::UnknownDefaultPermission { role, .. }) if role == "volunteer"
        ));
    }

    #[test]
    fn test_unknown_restricted_group() {
        let catalog = PermissionCatalog::new(vec![permission("events.view", "events")]).unwrap();
        let registry = GroupRegistry::new(vec![group("events", &["events.view"])]).unwrap();
        let defaults = RoleDefaults::new(&catalog, HashMap::new());

        let result = check_consistency(&catalog, &registry, &defaults, &PolicyTable::standard());
        assert!(matches!(
            result,
            Err(CatalogError::UnknownRestrictedGroup { role, .. }) if role == "manager"
        ));
    }
}
