//! The permission catalog: every permission the system knows about.
//!
//! Built once at startup and read-only afterwards. Lookups by an unknown id
//! return `None`; callers treat that as a denial.

use classkeep_core::{CatalogError, CatalogResult};
use classkeep_models::{Permission, PermissionId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PermissionCatalog {
    permissions: Vec<Permission>,
    index: HashMap<PermissionId, usize>,
}

impl PermissionCatalog {
    /// Builds a catalog, keeping the given order. Fails on duplicate ids.
    pub fn new(permissions: Vec<Permission>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(permissions.len());
        for (position, permission) in permissions.iter().enumerate() {
            if index.insert(permission.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicatePermission(
                    permission.id.to_string(),
                ));
            }
        }
        Ok(Self { permissions, index })
    }

    /// All permissions in catalog order.
    pub fn list_all(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn find(&self, id: &str) -> Option<&Permission> {
        self.index.get(id).map(|&position| &self.permissions[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &PermissionId> {
        self.permissions.iter().map(|p| &p.id)
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}
