use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use humantime::parse_duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reconnect notification for lost connections", long_about = None)]
pub struct Cli {
    /// Chemin du fichier de configuration TOML.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Message d'erreur affiché dans la notification.
    #[arg(
        long,
        value_name = "TEXTE",
        default_value = "La connexion au serveur a été perdue."
    )]
    pub message: String,

    /// Signale qu'une reconnexion automatique est en cours (toast persistant).
    #[arg(long, action = ArgAction::SetTrue)]
    pub auto_reconnect: bool,

    /// Force le timeout du toast (ex. "10s").
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Utilise un layer JSON pour les logs (`--features json-logs`).
    #[arg(long, action = ArgAction::SetTrue)]
    pub json_logs: bool,

    /// Filtre de logs explicite (ex. "reconnect_notify=debug").
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
