//! The per-user record supplied by the external user directory.

use crate::roles::Role;
use classkeep_core::serde::deserialize_null_as_empty;
use serde::{Deserialize, Serialize};

/// Stored role tag and explicit grant list for one user.
///
/// The engine only reads this. `permissions` stays a list of raw strings:
/// entries that are not catalog ids never match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPermissionRecord {
    pub role: String,
    /// Explicitly granted permission ids. Absent or `null` means empty.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub permissions: Vec<String>,
}

impl UserPermissionRecord {
    pub fn new(role: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            role: role.into(),
            permissions,
        }
    }

    /// The recognized role, or `None` for an unknown tag.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}
