//! # Classkeep Models
//!
//! Domain models for the Classkeep access-control engine.
//!
//! # Modules
//!
//! - [`ids`]: Validated permission and group identifiers
//! - [`roles`]: The closed set of recognized roles
//! - [`permissions`]: Permission and permission group models
//! - [`grants`]: The user record supplied by the user directory
//! - [`catalog_file`]: Serialized catalog definitions
//!
//! # Example
//!
//! ```ignore
//! use classkeep_models::{PermissionId, Role, UserPermissionRecord};
//!
//! let record: UserPermissionRecord = serde_json::from_str(stored_json)?;
//! if record.role() == Some(Role::Teacher) {
//!     println!("teacher with {} grants", record.permissions.len());
//! }
//! ```

pub mod catalog_file;
pub mod grants;
pub mod ids;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root for convenience
pub use catalog_file::{CatalogDefinition, GroupDefinition, PermissionDefinition};
pub use grants::UserPermissionRecord;
pub use ids::{GroupId, IdError, PermissionId};
pub use permissions::{Permission, PermissionGroup};
pub use roles::{Role, UnknownRole};
