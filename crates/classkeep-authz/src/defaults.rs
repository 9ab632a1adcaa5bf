//! Per-role default permission lists.
//!
//! `admin` defaults are never authored: they are the catalog's full id list,
//! captured when the table is built. The other roles carry authored lists.

use crate::catalog::PermissionCatalog;
use classkeep_models::{PermissionId, Role};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RoleDefaults {
    all: Vec<PermissionId>,
    authored: HashMap<Role, Vec<PermissionId>>,
}

impl RoleDefaults {
    /// Builds the table. An authored `admin` entry is ignored in favour of the
    /// catalog-derived list.
    pub fn new(catalog: &PermissionCatalog, mut authored: HashMap<Role, Vec<PermissionId>>) -> Self {
        authored.remove(&Role::Admin);
        Self {
            all: catalog.ids().cloned().collect(),
            authored,
        }
    }

    pub fn defaults_for(&self, role: Role) -> &[PermissionId] {
        match role {
            Role::Admin => &self.all,
            other => self
                .authored
                .get(&other)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }

    /// Authored lists, for validation. Does not include `admin`.
    pub fn authored(&self) -> impl Iterator<Item = (Role, &[PermissionId])> {
        self.authored
            .iter()
            .map(|(role, ids)| (*role, ids.as_slice()))
    }
}
