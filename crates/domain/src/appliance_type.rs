//! Appliance type tags — the registry and dispatch key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// Which kind of appliance an instance is. Fixed for the instance's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplianceType {
    Light,
    Fan,
    Ac,
}

impl ApplianceType {
    /// Every appliance type.
    pub const ALL: &'static [Self] = &[Self::Light, Self::Fan, Self::Ac];

    /// Upper-case tag, e.g. `"AC"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Fan => "FAN",
            Self::Ac => "AC",
        }
    }
}

impl fmt::Display for ApplianceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ApplianceType {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseValueError {
                kind: "appliance type",
                input: s.to_string(),
            })
    }
}
