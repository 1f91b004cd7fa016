//! Event — an immutable record of what an appliance operation did.
//!
//! Every operation yields events instead of logging: *transitions* record a
//! state change, *notices* record a request that changed nothing. The
//! [`Display`](std::fmt::Display) form is the operator-facing log line.

use std::fmt;

use serde::Serialize;

use crate::ac_mode::AcMode;
use crate::command::Command;
use crate::speed::SpeedState;

/// Outcome record of a single appliance step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A light was switched on or off.
    LightSwitched { name: String, on: bool },
    /// A fan moved one speed level.
    FanSpeedChanged {
        name: String,
        from: SpeedState,
        to: SpeedState,
    },
    /// A fan was asked to speed up while already at the top level.
    FanAtMaximum { name: String },
    /// A fan was asked to slow down while already off.
    FanAlreadyOff { name: String },
    /// A fan without power refused a speed change.
    FanPoweredOff { name: String, command: Command },
    /// An air conditioner changed mode.
    AcModeChanged {
        name: String,
        from: AcMode,
        to: AcMode,
    },
}

impl Event {
    /// Whether this event records an actual state change.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            Self::LightSwitched { .. } | Self::FanSpeedChanged { .. } | Self::AcModeChanged { .. }
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LightSwitched { name, on } => {
                write!(f, "{name} turned {}", if *on { "ON" } else { "OFF" })
            }
            Self::FanSpeedChanged { name, from, to } if *to == SpeedState::Off => {
                write!(f, "{name} turned off by reducing speed from {from} to {to}")
            }
            Self::FanSpeedChanged { name, from, to } => {
                let direction = if to > from { "increased" } else { "decreased" };
                write!(
                    f,
                    "{name} speed {direction} from {from} to {to} (value: {})",
                    to.code()
                )
            }
            Self::FanAtMaximum { name } => write!(f, "{name} already at maximum speed"),
            Self::FanAlreadyOff { name } => write!(f, "{name} already off"),
            Self::FanPoweredOff { name, command } => {
                write!(f, "Cannot {} - {name} is powered off", command.describe())
            }
            Self::AcModeChanged { name, from, to } => write!(
                f,
                "{name} mode changed from {from} ({}) to {to} ({})",
                from.code(),
                to.code()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed_change(from: SpeedState, to: SpeedState) -> Event {
        Event::FanSpeedChanged {
            name: "Fan".to_string(),
            from,
            to,
        }
    }

    #[test]
    fn should_display_light_switch() {
        let event = Event::LightSwitched {
            name: "Light".to_string(),
            on: true,
        };
        assert_eq!(event.to_string(), "Light turned ON");
    }

    #[test]
    fn should_display_speed_increase_with_code() {
        let event = speed_change(SpeedState::Low, SpeedState::High);
        assert_eq!(
            event.to_string(),
            "Fan speed increased from LOW to HIGH (value: 2)"
        );
    }

    #[test]
    fn should_display_speed_decrease_with_code() {
        let event = speed_change(SpeedState::High, SpeedState::Low);
        assert_eq!(
            event.to_string(),
            "Fan speed decreased from HIGH to LOW (value: 1)"
        );
    }

    #[test]
    fn should_display_turning_off_when_reaching_off() {
        let event = speed_change(SpeedState::Low, SpeedState::Off);
        assert_eq!(
            event.to_string(),
            "Fan turned off by reducing speed from LOW to OFF"
        );
    }

    #[test]
    fn should_display_powered_off_refusal() {
        let event = Event::FanPoweredOff {
            name: "Fan".to_string(),
            command: Command::IncreaseSpeed,
        };
        assert_eq!(
            event.to_string(),
            "Cannot increase speed - Fan is powered off"
        );
    }

    #[test]
    fn should_display_mode_change_with_codes() {
        let event = Event::AcModeChanged {
            name: "Main AC".to_string(),
            from: AcMode::Off,
            to: AcMode::Heat,
        };
        assert_eq!(
            event.to_string(),
            "Main AC mode changed from OFF (0) to HEAT (2)"
        );
    }

    #[test]
    fn should_classify_transitions_and_notices() {
        assert!(speed_change(SpeedState::Off, SpeedState::Low).is_transition());
        assert!(!Event::FanAtMaximum {
            name: "Fan".to_string()
        }
        .is_transition());
        assert!(!Event::FanAlreadyOff {
            name: "Fan".to_string()
        }
        .is_transition());
    }

    #[test]
    fn should_serialize_with_type_tag() {
        let json = serde_json::to_value(speed_change(SpeedState::Off, SpeedState::Low)).unwrap();
        assert_eq!(json["type"], "fan_speed_changed");
        assert_eq!(json["from"], "off");
        assert_eq!(json["to"], "low");
    }
}
