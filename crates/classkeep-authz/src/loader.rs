//! Turning catalog definitions into a live [`AccessControl`].

use crate::access::AccessControl;
use crate::catalog::PermissionCatalog;
use crate::defaults::RoleDefaults;
use crate::groups::GroupRegistry;
use crate::policy::PolicyTable;
use classkeep_core::{CatalogError, CatalogResult};
use classkeep_models::{
    CatalogDefinition, GroupId, Permission, PermissionGroup, PermissionId, Role,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};
use validator::Validate;

/// Reads a JSON catalog definition from disk.
pub fn load_file(path: &Path) -> CatalogResult<CatalogDefinition> {
    info!(path = %path.display(), "Loading catalog definition");
    let raw = std::fs::read_to_string(path)?;
    let definition = serde_json::from_str(&raw)?;
    Ok(definition)
}

/// Builds an [`AccessControl`] from a definition using the standard policy table.
///
/// Ids are always parsed. With `validate` set the cross-reference checks run
/// as well; the built-in catalog and tests always validate.
pub fn build(definition: CatalogDefinition, validate: bool) -> CatalogResult<AccessControl> {
    definition
        .validate()
        .map_err(|e| CatalogError::InvalidDefinition(e.to_string()))?;

    let permissions = definition
        .permissions
        .into_iter()
        .map(|p| -> CatalogResult<Permission> {
            Ok(Permission::new(
                PermissionId::new(p.id)?,
                GroupId::new(p.group)?,
                p.name,
                p.description,
            ))
        })
        .collect::<CatalogResult<Vec<_>>>()?;

    let groups = definition
        .groups
        .into_iter()
        .map(|g| -> CatalogResult<PermissionGroup> {
            Ok(PermissionGroup {
                id: GroupId::new(g.id)?,
                name: g.name,
                description: g.description,
                permissions: parse_ids(g.permissions)?,
            })
        })
        .collect::<CatalogResult<Vec<_>>>()?;

    let catalog = PermissionCatalog::new(permissions)?;
    let registry = GroupRegistry::new(groups)?;

    let mut authored = HashMap::new();
    for (tag, ids) in definition.role_defaults {
        let role = Role::parse(&tag).ok_or_else(|| {
            CatalogError::InvalidDefinition(format!("role_defaults names unknown role '{}'", tag))
        })?;
        if role == Role::Admin {
            return Err(CatalogError::InvalidDefinition(
                "admin defaults are derived from the catalog and cannot be listed".to_string(),
            ));
        }
        authored.insert(role, parse_ids(ids)?);
    }
    let defaults = RoleDefaults::new(&catalog, authored);
    let policies = PolicyTable::standard();

    if validate {
        AccessControl::validated(catalog, registry, defaults, policies)
    } else {
        warn!("Catalog consistency validation is disabled");
        Ok(AccessControl::new(catalog, registry, defaults, policies))
    }
}

fn parse_ids(ids: Vec<String>) -> CatalogResult<Vec<PermissionId>> {
    ids.into_iter()
        .map(|id| PermissionId::new(id).map_err(CatalogError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn test_builtin_builds_and_validates() {
        let access = build(builtin::definition(), true).unwrap();
        assert_eq!(access.catalog().len(), 36);
        assert_eq!(access.groups().len(), 10);
    }

    #[test]
    fn test_unknown_role_in_defaults() {
        let mut definition = builtin::definition();
        definition
            .role_defaults
            .insert("janitor".to_string(), vec![]);
        assert!(matches!(
            build(definition, true),
            Err(CatalogError::InvalidDefinition(msg)) if msg.contains("janitor")
        ));
    }

    #[test]
    fn test_admin_defaults_rejected() {
        let mut definition = builtin::definition();
        definition.role_defaults.insert("admin".to_string(), vec![]);
        assert!(matches!(
            build(definition, true),
            Err(CatalogError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_invalid_permission_id() {
        let mut definition = builtin::definition();
        definition.permissions[0].id = "Students View".to_string();
        assert!(matches!(
            build(definition, true),
            Err(CatalogError::InvalidId { kind: "permission", .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut definition = builtin::definition();
        definition.groups[0].name.clear();
        assert!(matches!(
            build(definition, true),
            Err(CatalogError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_skipping_validation_allows_inconsistency() {
        let mut definition = builtin::definition();
        definition.groups[0].permissions.pop();
        assert!(build(definition.clone(), true).is_err());
        assert!(build(definition, false).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let result = load_file(Path::new("/nonexistent/classkeep/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
