//! Effective-permission resolution.
//!
//! The grant list in force for a user is the stored list, with one exception:
//! a `teacher` whose stored list is empty gets the teacher defaults. The check
//! is on exact role equality. No other role, including ones that have
//! authored defaults, ever gets a fallback.

use crate::access::AccessControl;
use crate::defaults::RoleDefaults;
use classkeep_models::Role;
use tracing::debug;

/// Resolves the grant list in force for a user.
pub fn effective_permissions(
    stored: Vec<String>,
    role: Option<Role>,
    defaults: &RoleDefaults,
) -> Vec<String> {
    if role == Some(Role::Teacher) && stored.is_empty() {
        debug!("Teacher has no stored grants, substituting teacher defaults");
        return defaults
            .defaults_for(Role::Teacher)
            .iter()
            .map(|id| id.to_string())
            .collect();
    }
    stored
}

impl AccessControl {
    /// See [`effective_permissions`].
    pub fn effective_permissions(
        &self,
        stored: Vec<String>,
        role: impl Into<Option<Role>>,
    ) -> Vec<String> {
        effective_permissions(stored, role.into(), self.defaults())
    }
}
