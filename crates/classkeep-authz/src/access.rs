//! The shared access-control handle.
//!
//! [`AccessControl`] owns the immutable catalog, group registry, default table
//! and policy table behind `Arc`s. Clone it into whatever needs decisions; no
//! clone ever observes a mutation.

use crate::catalog::PermissionCatalog;
use crate::defaults::RoleDefaults;
use crate::groups::GroupRegistry;
use crate::policy::PolicyTable;
use crate::{builtin, loader, validate};
use classkeep_config::AuthzConfig;
use classkeep_core::CatalogResult;
use classkeep_models::{CatalogDefinition, PermissionId, Role};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AccessControl {
    catalog: Arc<PermissionCatalog>,
    groups: Arc<GroupRegistry>,
    defaults: Arc<RoleDefaults>,
    policies: Arc<PolicyTable>,
}

impl AccessControl {
    /// Assembles the parts without consistency checks.
    pub fn new(
        catalog: PermissionCatalog,
        groups: GroupRegistry,
        defaults: RoleDefaults,
        policies: PolicyTable,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            groups: Arc::new(groups),
            defaults: Arc::new(defaults),
            policies: Arc::new(policies),
        }
    }

    /// Assembles the parts after [`validate::check_consistency`] passes.
    pub fn validated(
        catalog: PermissionCatalog,
        groups: GroupRegistry,
        defaults: RoleDefaults,
        policies: PolicyTable,
    ) -> CatalogResult<Self> {
        validate::check_consistency(&catalog, &groups, &defaults, &policies)?;
        Ok(Self::new(catalog, groups, defaults, policies))
    }

    /// The catalog shipped with the application, validated.
    pub fn builtin() -> CatalogResult<Self> {
        loader::build(builtin::definition(), true)
    }

    /// A validated catalog from a definition.
    pub fn from_definition(definition: CatalogDefinition) -> CatalogResult<Self> {
        loader::build(definition, true)
    }

    /// Loads the catalog selected by the configuration.
    ///
    /// This is the only fallible step in the engine's lifetime; callers abort
    /// startup on error.
    pub fn from_config(config: &AuthzConfig) -> CatalogResult<Self> {
        let (access, source) = match &config.catalog_path {
            Some(path) => {
                let definition = loader::load_file(path)?;
                (loader::build(definition, config.validate_catalog)?, "file")
            }
            None => (
                loader::build(builtin::definition(), config.validate_catalog)?,
                "builtin",
            ),
        };

        info!(
            source,
            permissions = access.catalog.len(),
            groups = access.groups.len(),
            "Permission catalog loaded"
        );
        classkeep_observability::track_catalog_loaded(
            source,
            access.catalog.len(),
            access.groups.len(),
        );

        Ok(access)
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    pub fn defaults(&self) -> &RoleDefaults {
        &self.defaults
    }

    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    pub fn defaults_for(&self, role: Role) -> &[PermissionId] {
        self.defaults.defaults_for(role)
    }
}
