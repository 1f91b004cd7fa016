//! Air conditioner — switched off by setting its mode to `OFF`.

use crate::ac_mode::{AcMode, OutOfRangeModePolicy};
use crate::appliance_type::ApplianceType;
use crate::error::InvalidModeError;
use crate::event::Event;

use super::Controllable;

/// An air conditioner whose on/off state is derived from its mode.
#[derive(Debug, Clone)]
pub struct AirConditioner {
    name: String,
    mode: AcMode,
    out_of_range: OutOfRangeModePolicy,
}

impl Default for AirConditioner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl AirConditioner {
    /// Name used when none is configured.
    pub const DEFAULT_NAME: &'static str = "Main AC";

    /// Create an air conditioner in `OFF` mode with the default
    /// out-of-range policy.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: AcMode::Off,
            out_of_range: OutOfRangeModePolicy::default(),
        }
    }

    /// Replace the policy applied to numeric modes outside `0..=4`.
    #[must_use]
    pub fn with_out_of_range_policy(mut self, policy: OutOfRangeModePolicy) -> Self {
        self.out_of_range = policy;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mode(&self) -> AcMode {
        self.mode
    }

    /// Switch to `mode` unconditionally.
    pub fn set_mode(&mut self, mode: AcMode) -> Event {
        let from = std::mem::replace(&mut self.mode, mode);
        Event::AcModeChanged {
            name: self.name.clone(),
            from,
            to: mode,
        }
    }

    /// Interpret operator input as a mode and switch to it.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidModeError`] and leaves the mode untouched when the
    /// input cannot be interpreted; see [`parse_mode`](Self::parse_mode).
    pub fn set_mode_from_input(&mut self, input: &str) -> Result<Event, InvalidModeError> {
        let mode = self.parse_mode(input)?;
        Ok(self.set_mode(mode))
    }

    /// Interpret operator input as a mode.
    ///
    /// Integers are tried first and mapped through the out-of-range policy;
    /// anything else must be a mode name (case-insensitive).
    ///
    /// # Errors
    ///
    /// - [`InvalidModeError::Missing`] for blank input
    /// - [`InvalidModeError::Unknown`] for an unrecognised name
    /// - [`InvalidModeError::OutOfRange`] for a bad code under
    ///   [`OutOfRangeModePolicy::Reject`]
    pub fn parse_mode(&self, input: &str) -> Result<AcMode, InvalidModeError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InvalidModeError::Missing);
        }
        match input.parse::<i64>() {
            Ok(code) => self.out_of_range.resolve(code),
            Err(_) => {
                AcMode::from_name(input).ok_or_else(|| InvalidModeError::Unknown(input.to_string()))
            }
        }
    }
}

impl Controllable for AirConditioner {
    fn appliance_type(&self) -> ApplianceType {
        ApplianceType::Ac
    }

    fn is_on(&self) -> bool {
        self.mode != AcMode::Off
    }

    fn turn_off(&mut self) -> Vec<Event> {
        if self.mode == AcMode::Off {
            return Vec::new();
        }
        vec![self.set_mode(AcMode::Off)]
    }

    fn status(&self) -> String {
        format!(
            "{} is {} (Mode: {} - {})",
            self.name,
            if self.is_on() { "ON" } else { "OFF" },
            self.mode,
            self.mode.code()
        )
    }
}
