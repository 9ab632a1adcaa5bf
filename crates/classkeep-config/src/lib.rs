//! # Classkeep Config
//!
//! Configuration types for the Classkeep access-control engine.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`authz`]: Catalog source and load-time validation
//! - [`logging`]: Log level and output format
//!
//! # Example
//!
//! ```ignore
//! use classkeep_config::{AuthzConfig, LoggingConfig};
//!
//! let authz_config = AuthzConfig::from_env();
//! let logging_config = LoggingConfig::from_env();
//! ```

pub mod authz;
pub mod logging;

// Re-export commonly used types at crate root
pub use authz::AuthzConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Parses the boolean spellings accepted in environment variables.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
