//! Load-time error taxonomy for permission catalogs.
//!
//! Resolution never fails at runtime; every unknown input degrades to a denial.
//! The only fallible step is building a catalog, and a failure there is meant
//! to abort startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid {kind} id '{value}': {reason}")]
    InvalidId {
        kind: &'static str,
        value: String,
        reason: String,
    },
    #[error("permission '{0}' is defined more than once")]
    DuplicatePermission(String),
    #[error("group '{0}' is defined more than once")]
    DuplicateGroup(String),
    #[error("permission '{permission}' references unknown group '{group}'")]
    UnknownGroup { permission: String, group: String },
    #[error("group '{0}' has no member permissions")]
    EmptyGroup(String),
    #[error("group '{group}' lists permission '{permission}' more than once")]
    DuplicateGroupMember { group: String, permission: String },
    #[error("group '{group}' lists permission '{permission}' which does not belong to it")]
    GroupMemberMismatch { group: String, permission: String },
    #[error("permission '{permission}' belongs to group '{group}' but is missing from its member list")]
    MissingGroupMember { group: String, permission: String },
    #[error("default permissions for role '{role}' reference unknown permission '{permission}'")]
    UnknownDefaultPermission { role: String, permission: String },
    #[error("role '{role}' restricts unknown group '{group}'")]
    UnknownRestrictedGroup { role: String, group: String },
    #[error("invalid catalog definition: {0}")]
    InvalidDefinition(String),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
