//! Dispatch table — resolves a `(Command, ApplianceType)` pair to its handler.

use std::collections::BTreeMap;

use smarthome_domain::appliance::{Appliance, Controllable};
use smarthome_domain::appliance_type::ApplianceType;
use smarthome_domain::command::Command;
use smarthome_domain::error::{InvalidModeError, SmartHomeError};
use smarthome_domain::event::Event;

/// A function bound to one `(command, type)` pair.
///
/// Receives the resolved appliance and the optional operator value, and
/// returns the events the transition produced.
pub type Handler = fn(&mut Appliance, Option<&str>) -> Result<Vec<Event>, SmartHomeError>;

/// Immutable mapping from `(Command, ApplianceType)` to [`Handler`].
#[derive(Debug, Clone)]
pub struct DispatchTable {
    handlers: BTreeMap<(Command, ApplianceType), Handler>,
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl DispatchTable {
    /// Create a builder for a custom table.
    #[must_use]
    pub fn builder() -> DispatchTableBuilder {
        DispatchTableBuilder::default()
    }

    /// The table for the light, fan, and air-conditioner appliance set.
    #[must_use]
    pub fn standard() -> Self {
        let entries: [((Command, ApplianceType), Handler); 4] = [
            ((Command::Toggle, ApplianceType::Light), toggle_light),
            ((Command::IncreaseSpeed, ApplianceType::Fan), increase_fan_speed),
            ((Command::DecreaseSpeed, ApplianceType::Fan), decrease_fan_speed),
            ((Command::SetMode, ApplianceType::Ac), set_ac_mode),
        ];
        Self {
            handlers: BTreeMap::from(entries),
        }
    }

    /// Resolve the handler for `command` on `appliance`.
    ///
    /// # Errors
    ///
    /// - [`SmartHomeError::UnsupportedCommand`] if no appliance type handles `command`
    /// - [`SmartHomeError::CommandNotApplicable`] if `command` exists but not for `appliance`
    pub fn resolve(
        &self,
        command: Command,
        appliance: ApplianceType,
    ) -> Result<Handler, SmartHomeError> {
        if let Some(handler) = self.handlers.get(&(command, appliance)) {
            return Ok(*handler);
        }
        if self.supports(command) {
            Err(SmartHomeError::CommandNotApplicable { command, appliance })
        } else {
            Err(SmartHomeError::UnsupportedCommand(command))
        }
    }

    /// Whether any appliance type has a handler for `command`.
    #[must_use]
    pub fn supports(&self, command: Command) -> bool {
        self.handlers.keys().any(|(c, _)| *c == command)
    }

    /// Every registered `(command, type)` pair, in a stable order.
    pub fn entries(&self) -> impl Iterator<Item = (Command, ApplianceType)> + '_ {
        self.handlers.keys().copied()
    }
}

/// Step-by-step builder for [`DispatchTable`].
#[derive(Debug, Default)]
pub struct DispatchTableBuilder {
    handlers: Vec<((Command, ApplianceType), Handler)>,
}

impl DispatchTableBuilder {
    #[must_use]
    pub fn handler(mut self, command: Command, appliance: ApplianceType, handler: Handler) -> Self {
        self.handlers.push(((command, appliance), handler));
        self
    }

    /// Consume the builder, check uniqueness, and return the table.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::DuplicateHandler`] if a pair was registered twice.
    pub fn build(self) -> Result<DispatchTable, SmartHomeError> {
        let mut handlers = BTreeMap::new();
        for ((command, appliance), handler) in self.handlers {
            if handlers.insert((command, appliance), handler).is_some() {
                return Err(SmartHomeError::DuplicateHandler { command, appliance });
            }
        }
        Ok(DispatchTable { handlers })
    }
}

fn mismatch(expected: ApplianceType, actual: &Appliance) -> SmartHomeError {
    SmartHomeError::TypeMismatch {
        expected,
        actual: actual.appliance_type(),
    }
}

/// `TOGGLE` on a light.
pub fn toggle_light(
    appliance: &mut Appliance,
    _value: Option<&str>,
) -> Result<Vec<Event>, SmartHomeError> {
    match appliance {
        Appliance::Light(light) => Ok(vec![light.toggle()]),
        other => Err(mismatch(ApplianceType::Light, other)),
    }
}

/// `INCREASE_SPEED` on a fan.
pub fn increase_fan_speed(
    appliance: &mut Appliance,
    _value: Option<&str>,
) -> Result<Vec<Event>, SmartHomeError> {
    match appliance {
        Appliance::Fan(fan) => Ok(vec![fan.increase_speed()]),
        other => Err(mismatch(ApplianceType::Fan, other)),
    }
}

/// `DECREASE_SPEED` on a fan.
pub fn decrease_fan_speed(
    appliance: &mut Appliance,
    _value: Option<&str>,
) -> Result<Vec<Event>, SmartHomeError> {
    match appliance {
        Appliance::Fan(fan) => Ok(vec![fan.decrease_speed()]),
        other => Err(mismatch(ApplianceType::Fan, other)),
    }
}

/// `SET_MODE` on an air conditioner. The value is the operator's mode input.
pub fn set_ac_mode(
    appliance: &mut Appliance,
    value: Option<&str>,
) -> Result<Vec<Event>, SmartHomeError> {
    match appliance {
        Appliance::AirConditioner(ac) => {
            let input = value.ok_or(InvalidModeError::Missing)?;
            Ok(vec![ac.set_mode_from_input(input)?])
        }
        other => Err(mismatch(ApplianceType::Ac, other)),
    }
}
