//! Classkeep Observability Module
//!
//! Provides logging setup and decision metrics:
//! - Console logging via `tracing-subscriber` (always available)
//! - Decision and catalog metrics via the `metrics` facade
//!
//! Metrics can be disabled at compile time by turning off the default
//! `observability` feature, in which case the tracking functions become no-ops.
//!
//! # Examples
//!
//! ```no_run
//! use classkeep_config::LoggingConfig;
//! use classkeep_observability::{init_logging, track_access_decision};
//!
//! init_logging(&LoggingConfig::from_env()).ok();
//! track_access_decision("permission", "teacher", true);
//! ```

pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use logging::init_logging;

#[cfg(feature = "observability")]
pub use crate::metrics::{track_access_decision, track_catalog_loaded};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    /// No-op decision tracking when feature disabled
    pub fn track_access_decision(_kind: &'static str, _role: &'static str, _allowed: bool) {}

    /// No-op catalog tracking when feature disabled
    pub fn track_catalog_loaded(_source: &'static str, _permissions: usize, _groups: usize) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
