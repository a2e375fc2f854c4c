//! Game mode selection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who plays O?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum GameMode {
    /// Two people share the keyboard.
    #[default]
    #[serde(rename = "human")]
    #[value(name = "human")]
    HumanVsHuman,
    /// The human plays X, the computer plays O.
    #[serde(rename = "cpu")]
    #[value(name = "cpu")]
    HumanVsComputer,
}

impl GameMode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::HumanVsHuman => "Human vs Human",
            Self::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Toggles between the two modes.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::HumanVsHuman => Self::HumanVsComputer,
            Self::HumanVsComputer => Self::HumanVsHuman,
        }
    }
}
