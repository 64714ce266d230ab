use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bus(#[from] BusError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("missing required configuration field: {field}")]
    MissingField { field: &'static str },
    #[error("invalid configuration for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error("configuration error: {0}")]
    Other(String),
}

/// Registration failures on the action bus. Callers that mirror the
/// platform behaviour catch and log these instead of propagating them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusError {
    #[error("subscriber {subscriber} is already registered")]
    AlreadyRegistered { subscriber: &'static str },
    #[error("subscriber {subscriber} is not registered")]
    NotRegistered { subscriber: &'static str },
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification backend failed")]
    Backend,
    #[error("invalid notification payload: {0}")]
    InvalidPayload(String),
}
