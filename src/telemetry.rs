//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; hosts call [`init_tracing`] once
//! at startup to route them to stderr.

use tracing_subscriber::fmt;

use crate::config::{ConfigError, LogFormat, LoggingConfig};

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Returns `ConfigError::ValidationFailed` for a bad filter directive and
/// `ConfigError::TelemetryInit` if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = config.env_filter()?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ConfigError::TelemetryInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialization_is_rejected() {
        let config = LoggingConfig::default();

        let _ = init_tracing(&config);
        let second = init_tracing(&config);

        assert!(matches!(second, Err(ConfigError::TelemetryInit(_))));
    }

    #[test]
    fn bad_filter_is_rejected_before_install() {
        let config = LoggingConfig {
            filter: "people_data=notalevel".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            init_tracing(&config),
            Err(ConfigError::ValidationFailed(_))
        ));
    }
}
