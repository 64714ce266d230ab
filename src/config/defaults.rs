pub(super) fn default_notify_appname() -> String {
    "Reconnect".to_string()
}

pub(super) fn default_reconnect_label() -> String {
    "Se reconnecter".to_string()
}

pub(super) fn default_cancel_label() -> String {
    "Annuler la reconnexion".to_string()
}
