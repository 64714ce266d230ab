use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Result;
use crate::error::Error as NotifError;

mod defaults;
mod env;
mod raw;
mod serde;

pub(crate) use self::serde::HumantimeDuration;

#[derive(Debug, Clone)]
pub struct Config {
    pub notify: NotifySettings,
}

/// Presentation settings for the reconnect toast. The title is fixed by
/// the widget; everything user-facing around it is configurable.
#[derive(Debug, Clone)]
pub struct NotifySettings {
    pub appname: String,
    pub icon: Option<PathBuf>,
    pub timeout: Option<Duration>,
    pub default_timeout: bool,
    pub reconnect_label: String,
    pub cancel_label: String,
}

impl Config {
    /// Load configuration from a file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration file cannot be read,
    /// parsed, when environment overrides are invalid, or when the
    /// resulting values fail validation.
    pub fn from_env_and_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut raw = raw::load(path).map_err(NotifError::from)?;
        raw.apply_env_overrides().map_err(NotifError::from)?;
        raw.validate_and_build()
    }
}
