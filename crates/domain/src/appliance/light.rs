//! Light — a plain on/off switch.

use crate::appliance_type::ApplianceType;
use crate::event::Event;

use super::Controllable;

/// A light that can only be toggled.
#[derive(Debug, Clone, Default)]
pub struct Light {
    on: bool,
}

impl Light {
    /// Display name used in status lines and events.
    pub const NAME: &'static str = "Light";

    /// Flip the light. Always produces a transition.
    pub fn toggle(&mut self) -> Event {
        self.on = !self.on;
        Event::LightSwitched {
            name: Self::NAME.to_string(),
            on: self.on,
        }
    }
}

impl Controllable for Light {
    fn appliance_type(&self) -> ApplianceType {
        ApplianceType::Light
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn turn_off(&mut self) -> Vec<Event> {
        if !self.on {
            return Vec::new();
        }
        vec![self.toggle()]
    }

    fn status(&self) -> String {
        format!("{} is {}", Self::NAME, if self.on { "ON" } else { "OFF" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        let light = Light::default();
        assert!(!light.is_on());
        assert_eq!(light.status(), "Light is OFF");
    }

    #[test]
    fn should_toggle_from_off_to_on() {
        let mut light = Light::default();
        let event = light.toggle();
        assert!(light.is_on());
        assert_eq!(event.to_string(), "Light turned ON");
    }

    #[test]
    fn should_toggle_from_on_to_off() {
        let mut light = Light::default();
        light.toggle();
        let event = light.toggle();
        assert!(!light.is_on());
        assert_eq!(event.to_string(), "Light turned OFF");
    }

    #[test]
    fn should_turn_off_when_on() {
        let mut light = Light::default();
        light.toggle();
        let events = light.turn_off();
        assert!(!light.is_on());
        assert_eq!(events.len(), 1);
        assert_eq!(light.status(), "Light is OFF");
    }

    #[test]
    fn should_ignore_turn_off_when_already_off() {
        let mut light = Light::default();
        assert!(light.turn_off().is_empty());
        assert!(!light.is_on());
    }

    #[test]
    fn should_report_light_type() {
        assert_eq!(Light::default().appliance_type(), ApplianceType::Light);
    }
}
