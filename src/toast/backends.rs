use crate::bus::ActionBus;
use crate::error::NotifyError;

use super::ToastParams;

#[cfg(target_os = "linux")]
pub(super) fn show(
    params: &ToastParams,
    bus: &ActionBus,
) -> std::result::Result<u32, NotifyError> {
    linux::show(params, bus)
}

#[cfg(target_os = "linux")]
pub(super) fn close(id: u32) -> std::result::Result<(), NotifyError> {
    linux::close(id)
}

#[cfg(not(target_os = "linux"))]
pub(super) fn show(
    params: &ToastParams,
    bus: &ActionBus,
) -> std::result::Result<u32, NotifyError> {
    #[cfg(target_os = "windows")]
    {
        return windows::show(params, bus);
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        let _ = (params, bus);
        Err(NotifyError::Backend)
    }
}

#[cfg(not(target_os = "linux"))]
pub(super) fn close(id: u32) -> std::result::Result<(), NotifyError> {
    tracing::debug!(id, "toast close is not supported on this platform");
    Ok(())
}

#[cfg(target_os = "linux")]
mod linux {
    use std::sync::mpsc;
    use std::thread;

    use notify_rust::{Hint, Notification, Timeout as LibTimeout, Urgency as LibUrgency};
    use tracing::trace;

    use super::super::{ToastParams, ToastTimeout, ToastUrgency};
    use crate::action::Action;
    use crate::bus::ActionBus;
    use crate::error::NotifyError;

    const CATEGORY: &str = "network.error";

    pub fn show(params: &ToastParams, bus: &ActionBus) -> std::result::Result<u32, NotifyError> {
        let mut builder = Notification::new();
        builder
            .summary(&params.title)
            .body(&params.body)
            .appname(&params.appname)
            .urgency(map_urgency(params.urgency))
            .timeout(map_timeout(params.timeout))
            .hint(Hint::Category(CATEGORY.to_owned()));

        if let Some(icon_path) = &params.icon {
            builder.icon(&icon_path.to_string_lossy());
        }
        if let Some(id) = params.replace_id {
            builder.id(id);
        }
        if params.persistent {
            builder.hint(Hint::Resident(true));
        }

        builder.action(params.button.action.as_str(), &params.button.label);

        // wait_for_action blocks until the user interacts or the toast
        // goes away, so the handle lives on its own thread and the
        // platform id travels back over a channel.
        let bus = bus.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let handle = match builder.show() {
                Ok(handle) => handle,
                Err(err) => {
                    trace!(error = %err, "notification server rejected toast");
                    let _ = tx.send(Err(NotifyError::Backend));
                    return;
                }
            };
            let _ = tx.send(Ok(handle.id()));

            handle.wait_for_action(move |action| match action {
                // The server closing the toast is the delete gesture.
                "__closed" => bus.publish(Action::Dismiss),
                other => {
                    if let Ok(parsed) = other.parse::<Action>() {
                        bus.publish(parsed);
                    } else {
                        trace!(action = other, "ignoring unmapped toast action");
                    }
                }
            });
        });

        rx.recv().map_err(|_| NotifyError::Backend)?
    }

    pub fn close(id: u32) -> std::result::Result<(), NotifyError> {
        // notify-rust has no close-by-id, so replace the toast with one
        // that expires immediately.
        Notification::new()
            .id(id)
            .timeout(LibTimeout::Milliseconds(1))
            .show()
            .map(|_| ())
            .map_err(|_| NotifyError::Backend)
    }

    const fn map_urgency(urgency: ToastUrgency) -> LibUrgency {
        match urgency {
            ToastUrgency::Low => LibUrgency::Low,
            ToastUrgency::Normal => LibUrgency::Normal,
            ToastUrgency::Critical => LibUrgency::Critical,
        }
    }

    const fn map_timeout(timeout: ToastTimeout) -> LibTimeout {
        match timeout {
            ToastTimeout::Default => LibTimeout::Default,
            ToastTimeout::Never => LibTimeout::Never,
            ToastTimeout::Milliseconds(ms) => LibTimeout::Milliseconds(ms),
        }
    }
}

#[cfg(target_os = "windows")]
mod windows {
    use tauri_winrt_notification::{Duration as WinDuration, LoopableSound, Scenario, Sound, Toast};
    use windows::UI::Notifications::{NotificationSetting, ToastNotificationManager};
    use windows::core::HSTRING;

    use super::super::{ToastParams, ToastTimeout, ToastUrgency};
    use crate::bus::ActionBus;
    use crate::error::NotifyError;

    // The toast crate offers no action or close round-trip, so Windows
    // toasts are display-only and never feed the bus.
    pub fn show(params: &ToastParams, bus: &ActionBus) -> std::result::Result<u32, NotifyError> {
        let _ = bus;
        let appname = params.appname.as_str();
        let app_id = if appname.trim().is_empty() {
            Toast::POWERSHELL_APP_ID
        } else {
            appname
        };
        let timeout_kind = match params.timeout {
            ToastTimeout::Never => "never",
            ToastTimeout::Default => "default",
            ToastTimeout::Milliseconds(_) => "custom",
        };
        tracing::debug!(
            title = params.title,
            app_id,
            timeout = timeout_kind,
            urgency = ?params.urgency,
            "sending windows toast"
        );

        match ToastNotificationManager::CreateToastNotifierWithId(&HSTRING::from(app_id)) {
            Ok(notifier) => {
                if let Ok(setting) = notifier.Setting() {
                    tracing::debug!(
                        setting = ?setting,
                        "windows toast notification setting"
                    );
                    if setting != NotificationSetting::Enabled {
                        tracing::warn!(?setting, "toast notifications are disabled for this app");
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to query toast manager");
            }
        }

        let toast = Toast::new(app_id)
            .title(&params.title)
            .text1(&params.body)
            .duration(match params.timeout {
                ToastTimeout::Never => WinDuration::Long,
                _ => WinDuration::Short,
            })
            .scenario(match params.urgency {
                ToastUrgency::Critical => Scenario::Alarm,
                ToastUrgency::Normal => Scenario::Reminder,
                ToastUrgency::Low => Scenario::IncomingCall,
            })
            .sound(match params.urgency {
                ToastUrgency::Critical => Some(Sound::Loop(LoopableSound::Alarm)),
                ToastUrgency::Normal => Some(Sound::Default),
                ToastUrgency::Low => Some(Sound::Reminder),
            });

        if let Err(err) = toast.show() {
            tracing::warn!(error = %err, "windows toast failed");
            return Err(NotifyError::Backend);
        }
        tracing::debug!("windows toast displayed");
        Ok(0)
    }
}
