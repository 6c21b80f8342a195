//! Tracing subscriber installation.
//!
//! The library itself only emits `tracing` events. Binaries and test
//! harnesses that want to see them call [`init_tracing`] once at start-up.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive read by
/// [`TelemetryConfig::from_env`].
pub const LOG_FILTER_ENV: &str = "TASKDEF_LOG";

const DEFAULT_FILTER: &str = "info";

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive, e.g. `info` or `taskdef=debug`.
    pub filter: String,
    /// Whether each event shows its target module.
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Builds a configuration from [`LOG_FILTER_ENV`], falling back to the
    /// defaults when it is unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(LOG_FILTER_ENV).ok())
    }

    /// Builds a configuration from a raw [`LOG_FILTER_ENV`] value.
    #[must_use]
    pub fn from_env_value(value: Option<String>) -> Self {
        value
            .filter(|filter| !filter.trim().is_empty())
            .map_or_else(Self::default, |filter| Self {
                filter,
                ..Self::default()
            })
    }

    /// Sets the filter directive.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Installs a formatting subscriber as the global default.
///
/// An unparsable filter falls back to `RUST_LOG`, then to `info`.
///
/// # Errors
///
/// Returns [`TelemetryError::AlreadyInitialised`] when a global subscriber
/// has already been set.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.with_target)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInitialised(err.to_string()))
}
