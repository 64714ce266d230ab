mod backends;

use std::path::PathBuf;

use crate::action::Action;
use crate::bus::ActionBus;
use crate::error::NotifyError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastUrgency {
    Low,
    Normal,
    Critical,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastTimeout {
    Default,
    Never,
    Milliseconds(u32),
}

/// The single action button carried by a reconnect toast.
#[derive(Clone, Debug)]
pub struct ToastAction {
    pub action: Action,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct ToastParams {
    pub title: String,
    pub body: String,
    pub urgency: ToastUrgency,
    pub timeout: ToastTimeout,
    pub appname: String,
    pub icon: Option<PathBuf>,
    /// Platform id of a toast to replace instead of stacking a new one.
    pub replace_id: Option<u32>,
    /// Keep the toast on screen until explicitly closed.
    pub persistent: bool,
    pub button: ToastAction,
}

/// Seam over the platform notification server. Implementations display a
/// toast, forward user interactions onto the [`ActionBus`] by topic name,
/// and close a previously shown toast by platform id.
pub trait Toaster: Send + Sync {
    /// Display the toast and return its platform id.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Backend`] when the notification server
    /// rejects the toast or is unreachable.
    fn show(&self, params: &ToastParams, bus: &ActionBus) -> std::result::Result<u32, NotifyError>;

    /// Withdraw a previously shown toast.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Backend`] when the notification server
    /// refuses the request.
    fn close(&self, id: u32) -> std::result::Result<(), NotifyError>;
}

/// Production [`Toaster`] backed by the OS notification server.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemToaster;

impl SystemToaster {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Toaster for SystemToaster {
    fn show(&self, params: &ToastParams, bus: &ActionBus) -> std::result::Result<u32, NotifyError> {
        backends::show(params, bus)
    }

    fn close(&self, id: u32) -> std::result::Result<(), NotifyError> {
        backends::close(id)
    }
}

pub const fn compute_timeout(
    persistent: bool,
    timeout_ms: Option<u32>,
    default_timeout: bool,
) -> ToastTimeout {
    if persistent {
        ToastTimeout::Never
    } else if let Some(ms) = timeout_ms {
        ToastTimeout::Milliseconds(ms)
    } else if default_timeout {
        ToastTimeout::Default
    } else {
        ToastTimeout::Milliseconds(5_000)
    }
}

#[cfg(test)]
mod tests {
    use super::{ToastTimeout, compute_timeout};

    #[test]
    fn timeout_prefers_persistence() {
        let timeout = compute_timeout(true, Some(1000), true);
        assert!(matches!(timeout, ToastTimeout::Never));
    }

    #[test]
    fn timeout_falls_back_to_five_seconds() {
        let timeout = compute_timeout(false, None, false);
        assert_eq!(timeout, ToastTimeout::Milliseconds(5_000));
    }
}
