//! Manual smoke test for the reconnect toast against a live
//! notification server. Build with `--features dev-toast-test`.

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use reconnect_notify::action::Action;
use reconnect_notify::bus::ActionBus;
use reconnect_notify::config::{Config, NotifySettings};
use reconnect_notify::toast::SystemToaster;
use reconnect_notify::widget::{ActionListener, NotificationState, ReconnectNotification};

struct PrintListener {
    tx: mpsc::Sender<Action>,
}

impl ActionListener for PrintListener {
    fn on_dismissed(&self) {
        let _ = self.tx.send(Action::Dismiss);
    }

    fn on_reconnect(&self) {
        let _ = self.tx.send(Action::Reconnect);
    }

    fn on_cancel_reconnect(&self) {
        let _ = self.tx.send(Action::CancelReconnect);
    }
}

fn main() -> std::process::ExitCode {
    let auto_reconnect = std::env::args().any(|arg| arg == "--auto-reconnect");

    let settings = match Config::from_env_and_file("config.toml") {
        Ok(config) => config.notify,
        Err(err) => {
            eprintln!("falling back to default settings: {err}");
            default_settings()
        }
    };

    let bus = ActionBus::new();
    let mut widget = ReconnectNotification::new(SystemToaster::new(), bus, settings);

    let (tx, rx) = mpsc::channel();
    let state = NotificationState {
        error_message: "Toast de test : connexion perdue.".to_string(),
        auto_reconnect,
    };
    if let Err(err) = widget.show(&state, Arc::new(PrintListener { tx })) {
        eprintln!("failed to show toast: {err}");
        return std::process::ExitCode::from(1);
    }

    println!("Toast affiché. Cliquez sur le bouton ou fermez la notification.");
    match rx.recv_timeout(Duration::from_secs(60)) {
        Ok(action) => println!("Action reçue : {action}"),
        Err(_) => println!("Aucune interaction reçue dans les 60 secondes."),
    }

    widget.hide();
    std::process::ExitCode::SUCCESS
}

fn default_settings() -> NotifySettings {
    NotifySettings {
        appname: "Reconnect".to_string(),
        icon: None,
        timeout: None,
        default_timeout: false,
        reconnect_label: "Se reconnecter".to_string(),
        cancel_label: "Annuler la reconnexion".to_string(),
    }
}
