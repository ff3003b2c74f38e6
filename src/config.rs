//! Runtime settings for daab
//!
//! Settings are loaded from environment variables with fallback defaults and
//! feed the defaults offered by the initializer.
//!
//! # Environment Variables
//!
//! - `DAAB_OUTPUT_DIR`: Output subdirectory name - default: ".init"
//! - `DAAB_CLOUD_PROVIDER`: Default cloud provider (aws|gcp|azure) - default: "aws"
//! - `DAAB_ENVIRONMENT`: Default environment - default: "production"
//! - `DAAB_NAMESPACE`: Default Kubernetes namespace - default: "default"
//! - `DAAB_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use daab::DaabConfig;
//!
//! let config = DaabConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::model::CloudProvider;
use crate::store::DEFAULT_OUTPUT_DIR;
use std::env;
use std::fmt;
use thiserror::Error;
use tracing::Level;

const DEFAULT_CLOUD_PROVIDER: &str = "aws";
const DEFAULT_ENVIRONMENT: &str = "production";
const DEFAULT_NAMESPACE: &str = "default";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid cloud provider: {0}. Valid options: aws, gcp, azure")]
    InvalidProvider(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaabConfig {
    /// Name of the subdirectory documents are written to
    pub output_dir: String,

    /// Cloud provider offered as the default answer
    pub cloud_provider: String,

    pub environment: String,

    pub namespace: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for DaabConfig {
    /// Loads DAAB_* environment variables, falling back to defaults
    fn default() -> Self {
        let var = |key: &str, default: &str| {
            env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            output_dir: var("DAAB_OUTPUT_DIR", DEFAULT_OUTPUT_DIR),
            cloud_provider: var("DAAB_CLOUD_PROVIDER", DEFAULT_CLOUD_PROVIDER).to_lowercase(),
            environment: var("DAAB_ENVIRONMENT", DEFAULT_ENVIRONMENT),
            namespace: var("DAAB_NAMESPACE", DEFAULT_NAMESPACE),
            log_level: var("DAAB_LOG_LEVEL", DEFAULT_LOG_LEVEL).to_lowercase(),
        }
    }
}

impl DaabConfig {
    /// Built-in defaults, ignoring the environment
    pub fn builtin() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            cloud_provider: DEFAULT_CLOUD_PROVIDER.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Replaces the env-derived log level with the one logging was set up with
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level.as_str().to_lowercase();
        self
    }

    pub fn cloud_provider(&self) -> Result<CloudProvider, ConfigError> {
        self.cloud_provider
            .parse()
            .map_err(|_| ConfigError::InvalidProvider(self.cloud_provider.clone()))
    }

    /// Checks that:
    /// - The output directory is a single plain path component
    /// - The cloud provider is known
    /// - The log level is valid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dir = self.output_dir.as_str();
        if dir.is_empty() || dir == "." || dir == ".." || dir.contains(['/', '\\']) {
            return Err(ConfigError::ValidationFailed(format!(
                "Output directory must be a plain directory name, got '{}'",
                self.output_dir
            )));
        }

        self.cloud_provider()?;

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }
}

impl fmt::Display for DaabConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Daab Configuration:")?;
        writeln!(f, "  Output Dir: {}", self.output_dir)?;
        writeln!(f, "  Cloud Provider: {}", self.cloud_provider)?;
        writeln!(f, "  Environment: {}", self.environment)?;
        writeln!(f, "  Namespace: {}", self.namespace)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::unset("DAAB_OUTPUT_DIR"),
            EnvGuard::unset("DAAB_CLOUD_PROVIDER"),
            EnvGuard::unset("DAAB_ENVIRONMENT"),
            EnvGuard::unset("DAAB_NAMESPACE"),
            EnvGuard::unset("DAAB_LOG_LEVEL"),
        ];

        let config = DaabConfig::default();

        assert_eq!(config, DaabConfig::builtin());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("DAAB_OUTPUT_DIR", "deploy"),
            EnvGuard::set("DAAB_CLOUD_PROVIDER", "GCP"),
            EnvGuard::set("DAAB_ENVIRONMENT", "staging"),
            EnvGuard::set("DAAB_NAMESPACE", "shop"),
            EnvGuard::set("DAAB_LOG_LEVEL", "Debug"),
        ];

        let config = DaabConfig::default();

        assert_eq!(config.output_dir, "deploy");
        assert_eq!(config.cloud_provider().unwrap(), CloudProvider::Gcp);
        assert_eq!(config.environment, "staging");
        assert_eq!(config.namespace, "shop");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_blank_variable_uses_default() {
        let _guard = EnvGuard::set("DAAB_NAMESPACE", "   ");
        assert_eq!(DaabConfig::default().namespace, DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_validation_rejects_path_like_output_dir() {
        for dir in ["", ".", "..", "a/b", "a\\b"] {
            let config = DaabConfig {
                output_dir: dir.to_string(),
                ..DaabConfig::builtin()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::ValidationFailed(_))),
                "accepted output dir {:?}",
                dir
            );
        }
    }

    #[test]
    fn test_validation_rejects_unknown_provider() {
        let config = DaabConfig {
            cloud_provider: "heroku".to_string(),
            ..DaabConfig::builtin()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProvider(p)) if p == "heroku"
        ));
    }

    #[test]
    fn test_validation_rejects_invalid_log_level() {
        let config = DaabConfig {
            log_level: "loud".to_string(),
            ..DaabConfig::builtin()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_effective_log_level_overrides_invalid_env() {
        let _guard = EnvGuard::set("DAAB_LOG_LEVEL", "verbose");

        let config = DaabConfig::default();
        assert!(config.validate().is_err());

        let config = config.with_log_level(Level::DEBUG);
        assert_eq!(config.log_level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_display() {
        let display = DaabConfig::builtin().to_string();
        assert!(display.contains("Daab Configuration:"));
        assert!(display.contains("Cloud Provider: aws"));
        assert!(display.contains("Output Dir: .init"));
    }
}
