//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PEOPLE_DATA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use people_data::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let registry = config.registry();
//! ```

mod error;
mod logging;
mod validation;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use validation::ValidationConfig;

use serde::Deserialize;

use crate::domain::people::UserDataRegistry;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Input validation configuration
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PEOPLE_DATA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PEOPLE_DATA__LOGGING__FILTER=debug` -> `logging.filter = "debug"`
    /// - `PEOPLE_DATA__VALIDATION__PACKAGE_NAMES=strict` -> `validation.package_names = Strict`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PEOPLE_DATA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }

    /// Build an empty registry using the configured package name policy
    pub fn registry(&self) -> UserDataRegistry {
        UserDataRegistry::new(self.validation.package_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::people::PackageNamePolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PEOPLE_DATA__LOGGING__FILTER");
        env::remove_var("PEOPLE_DATA__LOGGING__FORMAT");
        env::remove_var("PEOPLE_DATA__VALIDATION__PACKAGE_NAMES");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.logging.filter, "info,people_data=debug");
        assert_eq!(config.validation.package_names, PackageNamePolicy::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PEOPLE_DATA__LOGGING__FILTER", "warn");
        env::set_var("PEOPLE_DATA__LOGGING__FORMAT", "json");
        env::set_var("PEOPLE_DATA__VALIDATION__PACKAGE_NAMES", "strict");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.validation.package_names, PackageNamePolicy::Strict);
    }

    #[test]
    fn test_invalid_policy_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PEOPLE_DATA__VALIDATION__PACKAGE_NAMES", "paranoid");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_registry_uses_configured_policy() {
        let config = AppConfig {
            validation: ValidationConfig {
                package_names: PackageNamePolicy::Strict,
            },
            ..Default::default()
        };

        assert_eq!(config.registry().policy(), PackageNamePolicy::Strict);
    }
}
