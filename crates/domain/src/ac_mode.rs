//! Air-conditioner operating modes and the policy for out-of-range codes.

use serde::{Deserialize, Serialize};

use crate::error::InvalidModeError;

define_coded_enum!(
    /// Discrete operating mode of an air conditioner.
    AcMode {
        Off = 0 => "OFF",
        Cool = 1 => "COOL",
        Heat = 2 => "HEAT",
        Fan = 3 => "FAN",
        Auto = 4 => "AUTO",
    }
);

/// What to do with a numeric mode that does not match any [`AcMode`] code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangeModePolicy {
    /// Silently treat the code as [`AcMode::Off`].
    CoerceToOff,
    /// Fail with [`InvalidModeError::OutOfRange`].
    Reject,
}

/// Policy applied when none is configured.
pub const DEFAULT_OUT_OF_RANGE_MODE_POLICY: OutOfRangeModePolicy =
    OutOfRangeModePolicy::CoerceToOff;

impl Default for OutOfRangeModePolicy {
    fn default() -> Self {
        DEFAULT_OUT_OF_RANGE_MODE_POLICY
    }
}

impl OutOfRangeModePolicy {
    /// Map a numeric code to a mode according to this policy.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidModeError::OutOfRange`] under [`Reject`](Self::Reject)
    /// when `code` is not a known mode.
    pub fn resolve(self, code: i64) -> Result<AcMode, InvalidModeError> {
        match (AcMode::from_code(code), self) {
            (Some(mode), _) => Ok(mode),
            (None, Self::CoerceToOff) => Ok(AcMode::Off),
            (None, Self::Reject) => Err(InvalidModeError::OutOfRange(code)),
        }
    }
}
