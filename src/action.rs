use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three user-interaction signals a reconnect notification can emit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Dismiss,
    Reconnect,
    CancelReconnect,
}

impl Action {
    pub const ALL: [Self; 3] = [Self::Dismiss, Self::Reconnect, Self::CancelReconnect];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::Reconnect => "reconnect",
            Self::CancelReconnect => "cancel_reconnect",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dismiss" => Ok(Self::Dismiss),
            "reconnect" => Ok(Self::Reconnect),
            "cancel_reconnect" => Ok(Self::CancelReconnect),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Action;
    use std::str::FromStr;

    #[test]
    fn action_from_str_accepts_topic_names() {
        assert_eq!(Action::from_str("dismiss"), Ok(Action::Dismiss));
        assert_eq!(Action::from_str("RECONNECT"), Ok(Action::Reconnect));
        assert_eq!(
            Action::from_str("cancel_reconnect"),
            Ok(Action::CancelReconnect)
        );
        assert!(Action::from_str("snooze").is_err());
    }

    #[test]
    fn action_round_trips_through_display() {
        for action in Action::ALL {
            assert_eq!(Action::from_str(action.as_str()), Ok(action));
        }
    }
}
