//! Fan — three speed levels, stepped one at a time.

use crate::appliance_type::ApplianceType;
use crate::command::Command;
use crate::event::Event;
use crate::speed::SpeedState;

use super::Controllable;

/// A fan whose on/off state is derived from its speed level.
///
/// The power flag is fixed at construction. A fan without power refuses
/// speed changes and reports itself as powered off.
#[derive(Debug, Clone)]
pub struct Fan {
    level: SpeedState,
    powered: bool,
}

impl Default for Fan {
    fn default() -> Self {
        Self::with_power(true)
    }
}

impl Fan {
    /// Display name used in status lines and events.
    pub const NAME: &'static str = "Fan";

    /// Create a stopped fan with the given power supply state.
    #[must_use]
    pub fn with_power(powered: bool) -> Self {
        Self {
            level: SpeedState::Off,
            powered,
        }
    }

    /// Current speed level.
    #[must_use]
    pub fn level(&self) -> SpeedState {
        self.level
    }

    /// Whether the fan has power.
    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Step up one level: `OFF → LOW → HIGH`.
    pub fn increase_speed(&mut self) -> Event {
        if !self.powered {
            return Self::refusal(Command::IncreaseSpeed);
        }
        match self.level.faster() {
            Some(next) => self.step_to(next),
            None => Event::FanAtMaximum {
                name: Self::NAME.to_string(),
            },
        }
    }

    /// Step down one level: `HIGH → LOW → OFF`.
    pub fn decrease_speed(&mut self) -> Event {
        if !self.powered {
            return Self::refusal(Command::DecreaseSpeed);
        }
        match self.level.slower() {
            Some(next) => self.step_to(next),
            None => Event::FanAlreadyOff {
                name: Self::NAME.to_string(),
            },
        }
    }

    fn step_to(&mut self, next: SpeedState) -> Event {
        let from = std::mem::replace(&mut self.level, next);
        Event::FanSpeedChanged {
            name: Self::NAME.to_string(),
            from,
            to: next,
        }
    }

    fn refusal(command: Command) -> Event {
        Event::FanPoweredOff {
            name: Self::NAME.to_string(),
            command,
        }
    }
}

impl Controllable for Fan {
    fn appliance_type(&self) -> ApplianceType {
        ApplianceType::Fan
    }

    fn is_on(&self) -> bool {
        self.powered && self.level != SpeedState::Off
    }

    /// Descend to `OFF` in a single call, one recorded step per level.
    fn turn_off(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Some(next) = self.level.slower() {
            events.push(self.step_to(next));
        }
        events
    }

    fn status(&self) -> String {
        if !self.powered {
            format!(
                "{} is POWERED OFF (Speed setting: {} - value: {})",
                Self::NAME,
                self.level,
                self.level.code()
            )
        } else if self.level == SpeedState::Off {
            format!("{} is OFF (Speed value: 0)", Self::NAME)
        } else {
            format!(
                "{} is ON (Speed: {} - value: {})",
                Self::NAME,
                self.level,
                self.level.code()
            )
        }
    }
}
