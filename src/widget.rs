use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::Result;
use crate::action::Action;
use crate::bus::{ActionBus, Handler};
use crate::config::NotifySettings;
use crate::error::Error;
use crate::toast::{ToastAction, ToastParams, ToastUrgency, Toaster, compute_timeout};

/// Title shown on every reconnect toast.
const DISCONNECTED_TITLE: &str = "Connexion perdue";

/// Name under which the widget subscribes on the action bus.
const SUBSCRIBER: &str = "reconnect_notification";

/// Caller-supplied callbacks invoked on user interaction with the toast.
pub trait ActionListener: Send + Sync {
    fn on_dismissed(&self);
    fn on_reconnect(&self);
    fn on_cancel_reconnect(&self);
}

/// Transient display state for one show/hide cycle.
#[derive(Clone, Debug)]
pub struct NotificationState {
    pub error_message: String,
    pub auto_reconnect: bool,
}

/// A toast informing the user of a lost connection.
///
/// With auto-reconnect enabled the toast is persistent and carries a
/// cancel-reconnect button; otherwise it is dismissible and offers to
/// reconnect. User interactions arrive through the [`ActionBus`] and are
/// forwarded to the caller's [`ActionListener`].
pub struct ReconnectNotification<T: Toaster> {
    bus: ActionBus,
    toaster: T,
    settings: NotifySettings,
    shown_id: Option<u32>,
}

impl<T: Toaster> ReconnectNotification<T> {
    pub const fn new(toaster: T, bus: ActionBus, settings: NotifySettings) -> Self {
        Self {
            bus,
            toaster,
            settings,
            shown_id: None,
        }
    }

    /// Display the toast and route its action signals to `listener`.
    ///
    /// Calling `show` while already shown replaces the visible toast and
    /// re-registers the listener; a stale registration is logged, never
    /// raised.
    ///
    /// # Errors
    ///
    /// Returns an error only when the notification backend fails to
    /// display the toast.
    pub fn show(&mut self, state: &NotificationState, listener: Arc<dyn ActionListener>) -> Result<()> {
        let handler = dispatch_handler(listener);
        if let Err(err) = self
            .bus
            .register(SUBSCRIBER, &Action::ALL, Arc::clone(&handler))
        {
            // The platform raises on duplicate registration; swallow it
            // the same way, but keep the fresh listener.
            warn!(error = %err, "listener already registered, replacing");
            let _ = self.bus.unregister(SUBSCRIBER);
            let _ = self.bus.register(SUBSCRIBER, &Action::ALL, handler);
        }

        let timeout_ms = self
            .settings
            .timeout
            .and_then(|dur| u32::try_from(dur.as_millis()).ok());

        let button = if state.auto_reconnect {
            ToastAction {
                action: Action::CancelReconnect,
                label: self.settings.cancel_label.clone(),
            }
        } else {
            ToastAction {
                action: Action::Reconnect,
                label: self.settings.reconnect_label.clone(),
            }
        };

        let params = ToastParams {
            title: DISCONNECTED_TITLE.to_string(),
            body: state.error_message.clone(),
            urgency: ToastUrgency::Critical,
            timeout: compute_timeout(
                state.auto_reconnect,
                timeout_ms,
                self.settings.default_timeout,
            ),
            appname: self.settings.appname.clone(),
            icon: self.settings.icon.clone(),
            replace_id: self.shown_id,
            persistent: state.auto_reconnect,
            button,
        };

        let id = self.toaster.show(&params, &self.bus).map_err(Error::from)?;
        info!(id, auto_reconnect = state.auto_reconnect, "reconnect notification shown");
        self.shown_id = Some(id);
        Ok(())
    }

    /// Unregister the listener and withdraw the toast. Safe to call when
    /// nothing is shown.
    pub fn hide(&mut self) {
        if let Err(err) = self.bus.unregister(SUBSCRIBER) {
            debug!(error = %err, "no listener to unregister");
        }
        if let Some(id) = self.shown_id.take() {
            if let Err(err) = self.toaster.close(id) {
                warn!(id, error = %err, "failed to withdraw reconnect notification");
            } else {
                info!(id, "reconnect notification hidden");
            }
        }
    }

    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.shown_id.is_some()
    }
}

fn dispatch_handler(listener: Arc<dyn ActionListener>) -> Handler {
    Arc::new(move |action| match action {
        Action::Dismiss => listener.on_dismissed(),
        Action::Reconnect => listener.on_reconnect(),
        Action::CancelReconnect => listener.on_cancel_reconnect(),
    })
}
