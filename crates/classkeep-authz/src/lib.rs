//! # Classkeep Authz
//!
//! The permission resolution engine for Classkeep.
//!
//! - [`catalog`]: Every known permission
//! - [`groups`]: Functional areas and their member permissions
//! - [`defaults`]: Per-role default permission lists
//! - [`policy`]: Role policies driving the resolution algorithm
//! - [`engine`]: `is_allowed` / `is_group_allowed`
//! - [`effective`]: The grant list actually in force for a user
//! - [`loader`] / [`validate`]: Building and checking catalogs at startup
//!
//! All data is immutable after construction and shared through
//! [`AccessControl`], which is cheap to clone and safe to use from any thread.
//! Resolution never fails: unknown permissions, groups and roles are denied.
//!
//! # Example
//!
//! ```ignore
//! use classkeep_authz::AccessControl;
//! use classkeep_core::permissions;
//! use classkeep_models::Role;
//!
//! let access = AccessControl::builtin()?;
//! let granted: Vec<String> = vec![];
//!
//! assert!(!access.is_allowed(&granted, permissions::FINANCES_VIEW, Role::Manager));
//! assert!(access.is_allowed(&granted, permissions::STUDENTS_VIEW, Role::Manager));
//!
//! let effective = access.effective_permissions(granted, Role::Teacher);
//! assert!(access.is_allowed(&effective, permissions::GRADES_EDIT, Role::Teacher));
//! ```

pub mod access;
pub mod builtin;
pub mod catalog;
pub mod defaults;
pub mod effective;
pub mod engine;
pub mod groups;
pub mod loader;
pub mod policy;
pub mod validate;

// Re-export commonly used types at crate root
pub use access::AccessControl;
pub use catalog::PermissionCatalog;
pub use defaults::RoleDefaults;
pub use effective::effective_permissions;
pub use engine::Decision;
pub use groups::GroupRegistry;
pub use policy::{PolicyTable, RolePolicy};
