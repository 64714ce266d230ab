use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reconnect_notify::action::Action;
use reconnect_notify::bus::ActionBus;
use reconnect_notify::config::NotifySettings;
use reconnect_notify::error::NotifyError;
use reconnect_notify::toast::{ToastParams, ToastTimeout, Toaster};
use reconnect_notify::widget::{ActionListener, NotificationState, ReconnectNotification};

#[derive(Default)]
struct ToastLog {
    shown: Mutex<Vec<ToastParams>>,
    closed: Mutex<Vec<u32>>,
    next_id: AtomicU32,
}

#[derive(Clone, Default)]
struct RecordingToaster {
    log: Arc<ToastLog>,
}

impl Toaster for RecordingToaster {
    fn show(&self, params: &ToastParams, _bus: &ActionBus) -> Result<u32, NotifyError> {
        let id = self.log.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.log.shown.lock().unwrap().push(params.clone());
        Ok(id)
    }

    fn close(&self, id: u32) -> Result<(), NotifyError> {
        self.log.closed.lock().unwrap().push(id);
        Ok(())
    }
}

#[derive(Default)]
struct CountingListener {
    dismissed: AtomicUsize,
    reconnected: AtomicUsize,
    cancelled: AtomicUsize,
}

impl ActionListener for CountingListener {
    fn on_dismissed(&self) {
        self.dismissed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_reconnect(&self) {
        self.reconnected.fetch_add(1, Ordering::SeqCst);
    }

    fn on_cancel_reconnect(&self) {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
    }
}

fn settings() -> NotifySettings {
    NotifySettings {
        appname: "Reconnect".to_string(),
        icon: None,
        timeout: None,
        default_timeout: false,
        reconnect_label: "Se reconnecter".to_string(),
        cancel_label: "Annuler la reconnexion".to_string(),
    }
}

fn state(auto_reconnect: bool) -> NotificationState {
    NotificationState {
        error_message: "connection reset by peer".to_string(),
        auto_reconnect,
    }
}

#[test]
fn hide_without_show_is_a_noop() {
    let toaster = RecordingToaster::default();
    let log = Arc::clone(&toaster.log);
    let mut widget = ReconnectNotification::new(toaster, ActionBus::new(), settings());

    widget.hide();

    assert!(!widget.is_shown());
    assert!(log.closed.lock().unwrap().is_empty());
}

#[test]
fn auto_reconnect_yields_persistent_toast_with_cancel_button() {
    let toaster = RecordingToaster::default();
    let log = Arc::clone(&toaster.log);
    let mut widget = ReconnectNotification::new(toaster, ActionBus::new(), settings());

    widget
        .show(&state(true), Arc::new(CountingListener::default()))
        .unwrap();

    let shown = log.shown.lock().unwrap();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].persistent);
    assert_eq!(shown[0].timeout, ToastTimeout::Never);
    assert_eq!(shown[0].button.action, Action::CancelReconnect);
    assert_eq!(shown[0].button.label, "Annuler la reconnexion");
}

#[test]
fn manual_mode_yields_dismissible_toast_with_reconnect_button() {
    let toaster = RecordingToaster::default();
    let log = Arc::clone(&toaster.log);
    let mut widget = ReconnectNotification::new(toaster, ActionBus::new(), settings());

    widget
        .show(&state(false), Arc::new(CountingListener::default()))
        .unwrap();

    let shown = log.shown.lock().unwrap();
    assert!(!shown[0].persistent);
    assert_ne!(shown[0].timeout, ToastTimeout::Never);
    assert_eq!(shown[0].button.action, Action::Reconnect);
    assert_eq!(shown[0].button.label, "Se reconnecter");
    assert_eq!(shown[0].body, "connection reset by peer");
    assert_eq!(shown[0].title, "Connexion perdue");
}

#[test]
fn show_twice_replaces_toast_and_listener() {
    let toaster = RecordingToaster::default();
    let log = Arc::clone(&toaster.log);
    let bus = ActionBus::new();
    let mut widget = ReconnectNotification::new(toaster, bus.clone(), settings());

    let first = Arc::new(CountingListener::default());
    let second = Arc::new(CountingListener::default());

    widget
        .show(&state(false), Arc::clone(&first) as Arc<dyn ActionListener>)
        .unwrap();
    widget
        .show(&state(false), Arc::clone(&second) as Arc<dyn ActionListener>)
        .unwrap();

    let shown = log.shown.lock().unwrap();
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[1].replace_id, Some(1));

    bus.publish(Action::Reconnect);
    assert_eq!(first.reconnected.load(Ordering::SeqCst), 0);
    assert_eq!(second.reconnected.load(Ordering::SeqCst), 1);
}

#[test]
fn each_signal_reaches_exactly_one_callback() {
    let toaster = RecordingToaster::default();
    let bus = ActionBus::new();
    let mut widget = ReconnectNotification::new(toaster, bus.clone(), settings());

    let listener = Arc::new(CountingListener::default());
    widget
        .show(&state(true), Arc::clone(&listener) as Arc<dyn ActionListener>)
        .unwrap();

    bus.publish(Action::Dismiss);
    assert_eq!(listener.dismissed.load(Ordering::SeqCst), 1);
    assert_eq!(listener.reconnected.load(Ordering::SeqCst), 0);
    assert_eq!(listener.cancelled.load(Ordering::SeqCst), 0);

    bus.publish(Action::Reconnect);
    bus.publish(Action::CancelReconnect);
    assert_eq!(listener.dismissed.load(Ordering::SeqCst), 1);
    assert_eq!(listener.reconnected.load(Ordering::SeqCst), 1);
    assert_eq!(listener.cancelled.load(Ordering::SeqCst), 1);
}

#[test]
fn hide_unregisters_and_closes_the_visible_toast() {
    let toaster = RecordingToaster::default();
    let log = Arc::clone(&toaster.log);
    let bus = ActionBus::new();
    let mut widget = ReconnectNotification::new(toaster, bus.clone(), settings());

    let listener = Arc::new(CountingListener::default());
    widget
        .show(&state(true), Arc::clone(&listener) as Arc<dyn ActionListener>)
        .unwrap();
    assert!(widget.is_shown());

    widget.hide();

    assert!(!widget.is_shown());
    assert_eq!(log.closed.lock().unwrap().as_slice(), &[1]);

    // Signals after hide reach nobody.
    bus.publish(Action::CancelReconnect);
    assert_eq!(listener.cancelled.load(Ordering::SeqCst), 0);

    // A second hide stays a no-op.
    widget.hide();
    assert_eq!(log.closed.lock().unwrap().len(), 1);
}
