//! # Classkeep
//!
//! The access-control engine of the Classkeep school administration app.
//! Given a user's role and explicit permission grants, it decides whether the
//! user may perform an action ("edit a grade column", "delete a classroom") or
//! see a functional area of the application.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── classkeep-core/           # Permission constants, catalog errors
//! ├── classkeep-models/         # Ids, roles, permissions, groups, user records
//! ├── classkeep-config/         # Environment configuration
//! ├── classkeep-observability/  # Logging and decision metrics
//! ├── classkeep-authz/          # Catalog, policies, resolution engine
//! └── classkeep-cli/            # Operator CLI
//! src/
//! ├── directory.rs              # User-directory collaborator
//! ├── session.rs                # Per-user access view for the UI
//! └── admin.rs                  # Permission administration tree
//! ```
//!
//! ## Roles
//!
//! | Role | Behaviour |
//! |------|-----------|
//! | admin | Always allowed |
//! | manager | Allowed, except finances and assets which need explicit grants |
//! | teacher | Explicit grants; curated defaults when none are stored |
//! | volunteer | Explicit grants only |
//!
//! Unrecognized roles, permissions and groups are denied.
//!
//! ## Quick Start
//!
//! ```ignore
//! use classkeep::{AccessControl, SessionAccess, InMemoryDirectory};
//! use classkeep_config::AuthzConfig;
//!
//! let access = AccessControl::from_config(&AuthzConfig::from_env())?;
//! let session = SessionAccess::load(&access, &directory, "user-42")?;
//! if let Some(session) = session {
//!     let show_grades = session.can_see("grades");
//!     let can_edit = session.can("grades.edit");
//! }
//! ```

pub mod admin;
pub mod directory;
pub mod session;

pub use admin::{CheckState, PermissionTree};
pub use directory::{InMemoryDirectory, UserDirectory};
pub use session::SessionAccess;

// Re-export workspace crates for convenience
pub use classkeep_authz;
pub use classkeep_authz::{AccessControl, Decision};
pub use classkeep_config;
pub use classkeep_core;
pub use classkeep_models;
pub use classkeep_observability;
