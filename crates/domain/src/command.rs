//! Commands — abstract operations requested against an appliance type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// A requested operation, independent of appliance type until dispatch
/// resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Toggle,
    IncreaseSpeed,
    DecreaseSpeed,
    SetMode,
}

impl Command {
    /// Every command.
    pub const ALL: &'static [Self] = &[
        Self::Toggle,
        Self::IncreaseSpeed,
        Self::DecreaseSpeed,
        Self::SetMode,
    ];

    /// Upper-case identifier, e.g. `"SET_MODE"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Toggle => "TOGGLE",
            Self::IncreaseSpeed => "INCREASE_SPEED",
            Self::DecreaseSpeed => "DECREASE_SPEED",
            Self::SetMode => "SET_MODE",
        }
    }

    /// Human phrasing used in messages, e.g. `"increase speed"`.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::IncreaseSpeed => "increase speed",
            Self::DecreaseSpeed => "decrease speed",
            Self::SetMode => "set mode",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseValueError {
                kind: "command",
                input: s.to_string(),
            })
    }
}
