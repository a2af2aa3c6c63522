use std::{fs, path::Path};

use rootline_solvers::equation::newton::{Config, ConfigError};
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Settings read from an optional TOML file.
///
/// Every key is optional:
///
/// ```toml
/// tolerance = 1e-7
/// max_iters = 100
/// log_level = "warn"
/// ```
///
/// `log_level` is a `tracing` filter directive used when `RUST_LOG` is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub tolerance: f64,
    pub max_iters: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            tolerance: config.tolerance(),
            max_iters: config.max_iters(),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Settings`] if the text is not valid TOML, has a
    /// value of the wrong type, or has an unknown key.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::SettingsFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Builds the validated solver config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the tolerance or iteration limit is invalid.
    pub fn solver_config(&self) -> std::result::Result<Config, ConfigError> {
        Config::new(self.max_iters, self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());

        let config = settings.solver_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_given_keys() {
        let settings = Settings::from_toml("max_iters = 25\nlog_level = \"debug\"").unwrap();
        assert_eq!(settings.max_iters, 25);
        assert_eq!(settings.log_level, "debug");
        assert_relative_eq!(settings.tolerance, 1e-7);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Settings::from_toml("tol = 1e-3"),
            Err(CliError::Settings(_))
        ));
    }

    #[test]
    fn invalid_limits_fail_validation() {
        let settings = Settings::from_toml("tolerance = -1.0").unwrap();
        assert_eq!(settings.solver_config(), Err(ConfigError::Tolerance));

        let settings = Settings::from_toml("max_iters = 0").unwrap();
        assert_eq!(settings.solver_config(), Err(ConfigError::MaxIters));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Settings::load(Path::new("/nonexistent/rootline.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rootline.toml"));
    }
}
