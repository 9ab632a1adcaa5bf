use classkeep_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Crates whose events pass the filter at the configured level.
const CLASSKEEP_TARGETS: &[&str] = &[
    "classkeep",
    "classkeep_authz",
    "classkeep_cli",
    "classkeep_config",
];

/// Builds the filter directive string for the configured level.
pub fn filter_directives(level: &str) -> String {
    CLASSKEEP_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize console logging.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` via [`LoggingConfig`]; `RUST_LOG` takes precedence when set
/// - **Format**: Compact with ANSI colors, or one JSON object per line
/// - **Target**: Events go to stderr so command output on stdout stays clean
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.level)));

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(layer).try_init()
}
