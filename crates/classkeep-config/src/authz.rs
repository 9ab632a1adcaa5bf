//! Catalog source configuration.
//!
//! # Environment Variables
//!
//! - `CLASSKEEP_CATALOG_PATH`: JSON catalog definition to load instead of the built-in catalog
//! - `CLASSKEEP_VALIDATE_CATALOG`: Validate the catalog at load time (default: true)

use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthzConfig {
    /// Catalog definition file. `None` selects the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    /// Run the consistency checks when loading the catalog.
    ///
    /// Ids are always parsed; this only toggles the cross-reference checks.
    pub validate_catalog: bool,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            validate_catalog: true,
        }
    }
}

impl AuthzConfig {
    /// Creates a new `AuthzConfig` from environment variables.
    ///
    /// Falls back to default values if environment variables are not set
    /// or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup("CLASSKEEP_CATALOG_PATH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let validate_catalog = lookup("CLASSKEEP_VALIDATE_CATALOG")
            .and_then(|v| crate::parse_bool(&v))
            .unwrap_or(true);

        Self {
            catalog_path,
            validate_catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AuthzConfig::from_vars(lookup(&[]));
        assert_eq!(config, AuthzConfig::default());
        assert!(config.catalog_path.is_none());
        assert!(config.validate_catalog);
    }

    #[test]
    fn test_catalog_path() {
        let config = AuthzConfig::from_vars(lookup(&[(
            "CLASSKEEP_CATALOG_PATH",
            "/etc/classkeep/catalog.json",
        )]));
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/classkeep/catalog.json"))
        );
    }

    #[test]
    fn test_blank_catalog_path_is_builtin() {
        let config = AuthzConfig::from_vars(lookup(&[("CLASSKEEP_CATALOG_PATH", "  ")]));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_validate_flag() {
        let config = AuthzConfig::from_vars(lookup(&[("CLASSKEEP_VALIDATE_CATALOG", "false")]));
        assert!(!config.validate_catalog);

        let config = AuthzConfig::from_vars(lookup(&[("CLASSKEEP_VALIDATE_CATALOG", "maybe")]));
        assert!(config.validate_catalog);
    }
}
