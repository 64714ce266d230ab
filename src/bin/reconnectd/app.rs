use std::path::PathBuf;
use std::sync::Arc;

use async_channel::{Sender, bounded};
use reconnect_notify::Result;
use reconnect_notify::action::Action;
use reconnect_notify::bus::ActionBus;
use reconnect_notify::config::Config;
use reconnect_notify::telemetry::init_tracing;
use reconnect_notify::toast::SystemToaster;
use reconnect_notify::widget::{ActionListener, NotificationState, ReconnectNotification};
use tokio::signal;
use tracing::info;

use super::cli::Cli;

const DEFAULT_CONFIG: &str = "config.toml";

/// Forwards widget callbacks into the async loop. The reconnection logic
/// itself belongs to the host application; this binary only reports what
/// the user chose.
struct ChannelListener {
    tx: Sender<Action>,
}

impl ActionListener for ChannelListener {
    fn on_dismissed(&self) {
        let _ = self.tx.try_send(Action::Dismiss);
    }

    fn on_reconnect(&self) {
        let _ = self.tx.try_send(Action::Reconnect);
    }

    fn on_cancel_reconnect(&self) {
        let _ = self.tx.try_send(Action::CancelReconnect);
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_filter.as_deref(), cli.json_logs)?;

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let mut config = Config::from_env_and_file(&config_path)?;
    if let Some(timeout) = cli.timeout {
        config.notify.timeout = Some(timeout);
    }

    let bus = ActionBus::new();
    let mut widget = ReconnectNotification::new(SystemToaster::new(), bus, config.notify);

    let (tx, rx) = bounded(4);
    let listener = Arc::new(ChannelListener { tx });

    let state = NotificationState {
        error_message: cli.message,
        auto_reconnect: cli.auto_reconnect,
    };
    widget.show(&state, listener)?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("shutdown signal received");
        }
        action = rx.recv() => {
            match action {
                Ok(Action::Dismiss) => info!("notification dismissed by the user"),
                Ok(Action::Reconnect) => {
                    info!("reconnect requested; the host application would redial here");
                }
                Ok(Action::CancelReconnect) => {
                    info!("auto-reconnect cancelled; the host application would stop redialing");
                }
                Err(_) => {}
            }
        }
    }

    widget.hide();
    Ok(())
}
