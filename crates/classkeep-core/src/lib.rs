//! # Classkeep Core
//!
//! Foundational constants and error types for the Classkeep access-control engine.
//!
//! - [`permissions`]: Permission and group identifier constants for the built-in catalog
//! - [`errors`]: Catalog load-time error taxonomy
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use classkeep_core::permissions;
//! use classkeep_core::errors::CatalogError;
//!
//! let required = permissions::GRADES_EDIT;
//! let err = CatalogError::DuplicateGroup(permissions::groups::GRADES.to_string());
//! ```

pub mod errors;
pub mod permissions;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{CatalogError, CatalogResult};
