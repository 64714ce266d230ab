use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use serde_with::serde_as;

use crate::Result;
use crate::error::ConfigError;

use super::defaults::{default_cancel_label, default_notify_appname, default_reconnect_label};
use super::env::{env_bool, env_duration, env_string};
use super::{Config, HumantimeDuration, NotifySettings};

pub(super) fn load(path: impl AsRef<Path>) -> std::result::Result<RawConfig, ConfigError> {
    let mut builder = ::config::Config::builder();
    let path = path.as_ref();
    builder = builder.add_source(::config::File::from(path).required(false));
    builder = builder.add_source(
        ::config::Environment::with_prefix("RECONNECT")
            .separator("__")
            .try_parsing(true),
    );

    builder
        .build()
        .map_err(|err| ConfigError::Other(err.to_string()))?
        .try_deserialize()
        .map_err(|err| ConfigError::Parse(err.to_string()))
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub(super) notify: RawNotify,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(super) struct RawNotify {
    #[serde(default = "default_notify_appname")]
    pub(super) appname: String,
    #[serde(default)]
    pub(super) icon: Option<PathBuf>,
    #[serde(default)]
    #[serde_as(as = "Option<HumantimeDuration>")]
    pub(super) timeout: Option<Duration>,
    #[serde(default)]
    pub(super) default_timeout: bool,
    #[serde(default = "default_reconnect_label")]
    pub(super) reconnect_label: String,
    #[serde(default = "default_cancel_label")]
    pub(super) cancel_label: String,
}

impl RawConfig {
    pub(super) fn apply_env_overrides(&mut self) -> std::result::Result<(), ConfigError> {
        if let Some(appname) = env_string("NOTIFY_APPNAME")? {
            self.notify.appname = appname;
        }
        if let Some(icon) = env_string("NOTIFY_ICON")? {
            self.notify.icon = Some(PathBuf::from(icon));
        }
        if let Some(timeout) = env_duration("NOTIFY_TIMEOUT")? {
            self.notify.timeout = Some(timeout);
        }
        if let Some(default_timeout) = env_bool("NOTIFY_TIMEOUT_DEFAULT")? {
            self.notify.default_timeout = default_timeout;
        }
        if let Some(label) = env_string("NOTIFY_RECONNECT_LABEL")? {
            self.notify.reconnect_label = label;
        }
        if let Some(label) = env_string("NOTIFY_CANCEL_LABEL")? {
            self.notify.cancel_label = label;
        }
        Ok(())
    }

    pub(super) fn validate_and_build(self) -> Result<Config> {
        if self.notify.appname.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "notify.appname",
                message: "appname cannot be empty".to_string(),
            }
            .into());
        }
        if self.notify.reconnect_label.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "notify.reconnect_label",
                message: "label cannot be empty".to_string(),
            }
            .into());
        }
        if self.notify.cancel_label.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "notify.cancel_label",
                message: "label cannot be empty".to_string(),
            }
            .into());
        }
        if let Some(timeout) = self.notify.timeout {
            if timeout.is_zero() {
                return Err(ConfigError::InvalidField {
                    field: "notify.timeout",
                    message: "timeout must be greater than zero".to_string(),
                }
                .into());
            }
        }

        Ok(Config {
            notify: NotifySettings {
                appname: self.notify.appname,
                icon: self.notify.icon,
                timeout: self.notify.timeout,
                default_timeout: self.notify.default_timeout,
                reconnect_label: self.notify.reconnect_label,
                cancel_label: self.notify.cancel_label,
            },
        })
    }
}

impl Default for RawNotify {
    fn default() -> Self {
        Self {
            appname: default_notify_appname(),
            icon: None,
            timeout: None,
            default_timeout: false,
            reconnect_label: default_reconnect_label(),
            cancel_label: default_cancel_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RawConfig, RawNotify};

    #[test]
    fn defaults_build_a_valid_config() {
        let raw = RawConfig {
            notify: RawNotify::default(),
        };
        let config = match raw.validate_and_build() {
            Ok(config) => config,
            Err(err) => panic!("default config should validate: {err}"),
        };
        assert_eq!(config.notify.appname, "Reconnect");
        assert!(config.notify.timeout.is_none());
    }

    #[test]
    fn empty_label_is_rejected() {
        let raw = RawConfig {
            notify: RawNotify {
                reconnect_label: "  ".to_string(),
                ..RawNotify::default()
            },
        };
        assert!(raw.validate_and_build().is_err());
    }
}
