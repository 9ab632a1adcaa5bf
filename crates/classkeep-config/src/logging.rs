//! Logging configuration.
//!
//! # Environment Variables
//!
//! - `LOG_LEVEL`: Level for Classkeep crates (default: "info")
//! - `LOG_FORMAT`: `compact` (default) or `json`

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = lookup("LOG_LEVEL")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "info".to_string());

        let format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Self { level, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::from_vars(|_| None);
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_json_format() {
        let config = LoggingConfig::from_vars(|key| match key {
            "LOG_FORMAT" => Some("JSON".to_string()),
            "LOG_LEVEL" => Some("Debug".to_string()),
            _ => None,
        });
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
    }
}
