//! Controller — the collaborator-facing surface of the appliance core.
//!
//! All appliance mutation goes through one [`Mutex`] held for the duration
//! of a single dispatch or turn-off sweep, so the interactive loop and the
//! maintenance scheduler can share a controller behind an `Arc`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use smarthome_domain::appliance::Controllable;
use smarthome_domain::appliance_type::ApplianceType;
use smarthome_domain::command::Command;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::event::Event;

use crate::dispatch::DispatchTable;
use crate::registry::Registry;

/// Routes commands to appliances and runs bulk operations.
#[derive(Debug)]
pub struct Controller {
    registry: Mutex<Registry>,
    dispatch: DispatchTable,
}

impl Controller {
    /// Create a controller owning `registry`.
    ///
    /// Handlers targeting an appliance type missing from the registry, and
    /// commands without any handler, are reported as warnings.
    #[must_use]
    pub fn new(registry: Registry, dispatch: DispatchTable) -> Self {
        for (command, appliance) in dispatch.entries() {
            if !registry.contains(appliance) {
                tracing::warn!(%command, %appliance, "handler targets an unregistered appliance type");
            }
        }
        for command in Command::ALL {
            if !dispatch.supports(*command) {
                tracing::warn!(%command, "command has no handler");
            }
        }
        Self {
            registry: Mutex::new(registry),
            dispatch,
        }
    }

    /// Run `command` against the appliance of type `appliance`.
    ///
    /// # Errors
    ///
    /// - [`SmartHomeError::ApplianceNotFound`] if no such appliance is registered
    /// - [`SmartHomeError::UnsupportedCommand`] if `command` has no handlers at all
    /// - [`SmartHomeError::CommandNotApplicable`] if `command` does not apply to `appliance`
    /// - [`SmartHomeError::InvalidMode`] if the value is not a valid AC mode
    /// - [`SmartHomeError::TypeMismatch`] if the dispatch table is inconsistent
    #[tracing::instrument(skip(self))]
    pub fn execute_action(
        &self,
        appliance: ApplianceType,
        command: Command,
        value: Option<&str>,
    ) -> Result<Vec<Event>, SmartHomeError> {
        let mut registry = self.lock();
        let result = registry
            .find_by_type_mut(appliance)
            .ok_or(SmartHomeError::ApplianceNotFound(appliance))
            .and_then(|target| {
                let handler = self.dispatch.resolve(command, appliance)?;
                handler(target, value)
            });
        drop(registry);

        match &result {
            Ok(events) => log_events(appliance, events),
            Err(err @ SmartHomeError::TypeMismatch { .. }) => {
                tracing::error!(error = %err, "dispatch table is inconsistent");
            }
            Err(err) => tracing::warn!(error = %err, "action rejected"),
        }
        result
    }

    /// Turn off every appliance in registry order.
    ///
    /// Every appliance is visited regardless of the others' state; the
    /// returned events cover the whole sweep.
    #[tracing::instrument(skip(self))]
    pub fn turn_off_all_appliances(&self) -> Vec<Event> {
        tracing::info!("turning off all appliances");
        let mut registry = self.lock();
        let mut events = Vec::new();
        for appliance in registry.all_mut() {
            let produced = appliance.turn_off();
            log_events(appliance.appliance_type(), &produced);
            events.extend(produced);
        }
        events
    }

    /// Status line of every appliance in registry order.
    #[must_use]
    pub fn display_status(&self) -> Vec<String> {
        self.lock()
            .all()
            .iter()
            .map(Controllable::status)
            .collect()
    }

    /// Maintenance entry point called by an external scheduler.
    ///
    /// Turns every appliance off. Calling it again is harmless.
    pub fn perform_system_update(&self) -> Vec<Event> {
        tracing::info!("system update initiated, turning off all appliances");
        let events = self.turn_off_all_appliances();
        tracing::info!(transitions = events.len(), "system update completed");
        events
    }

    /// Run `f` with read access to the registry.
    pub fn inspect<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_events(appliance: ApplianceType, events: &[Event]) {
    for event in events {
        tracing::info!(%appliance, transition = event.is_transition(), "{event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthome_domain::ac_mode::AcMode;
    use smarthome_domain::appliance::{AirConditioner, Appliance, Fan, Light};
    use smarthome_domain::speed::SpeedState;
    use std::sync::Arc;

    fn controller() -> Controller {
        let registry = Registry::new([
            Light::default().into(),
            Fan::default().into(),
            AirConditioner::default().into(),
        ])
        .unwrap();
        Controller::new(registry, DispatchTable::standard())
    }

    fn fan_level(controller: &Controller) -> SpeedState {
        controller.inspect(|registry| match registry.find_by_type(ApplianceType::Fan) {
            Some(Appliance::Fan(fan)) => fan.level(),
            _ => panic!("expected a fan"),
        })
    }

    fn ac_mode(controller: &Controller) -> AcMode {
        controller.inspect(|registry| match registry.find_by_type(ApplianceType::Ac) {
            Some(Appliance::AirConditioner(ac)) => ac.mode(),
            _ => panic!("expected an air conditioner"),
        })
    }

    fn light_on(controller: &Controller) -> bool {
        controller.inspect(|registry| registry.find_by_type(ApplianceType::Light).unwrap().is_on())
    }

    #[test]
    fn should_toggle_light() {
        let controller = controller();
        let events = controller
            .execute_action(ApplianceType::Light, Command::Toggle, None)
            .unwrap();
        assert_eq!(events.len(), 1);
        assert!(light_on(&controller));
    }

    #[test]
    fn should_cap_fan_at_high_then_turn_everything_off() {
        let controller = controller();
        controller
            .execute_action(ApplianceType::Light, Command::Toggle, None)
            .unwrap();
        controller
            .execute_action(ApplianceType::Ac, Command::SetMode, Some("cool"))
            .unwrap();
        for _ in 0..2 {
            controller
                .execute_action(ApplianceType::Fan, Command::IncreaseSpeed, None)
                .unwrap();
        }
        assert_eq!(fan_level(&controller), SpeedState::High);

        let events = controller
            .execute_action(ApplianceType::Fan, Command::IncreaseSpeed, None)
            .unwrap();
        assert_eq!(fan_level(&controller), SpeedState::High);
        assert_eq!(events[0].to_string(), "Fan already at maximum speed");

        controller.turn_off_all_appliances();
        assert_eq!(fan_level(&controller), SpeedState::Off);
        assert!(!light_on(&controller));
        assert_eq!(ac_mode(&controller), AcMode::Off);
    }

    #[test]
    fn should_set_ac_mode_by_code_and_by_name() {
        let controller = controller();
        controller
            .execute_action(ApplianceType::Ac, Command::SetMode, Some("2"))
            .unwrap();
        assert_eq!(ac_mode(&controller), AcMode::Heat);
        assert_eq!(ac_mode(&controller).code(), 2);

        controller
            .execute_action(ApplianceType::Ac, Command::SetMode, Some("auto"))
            .unwrap();
        assert_eq!(ac_mode(&controller), AcMode::Auto);
        assert_eq!(ac_mode(&controller).code(), 4);
    }

    #[test]
    fn should_reject_set_mode_on_light_without_changing_it() {
        let controller = controller();
        let result = controller.execute_action(ApplianceType::Light, Command::SetMode, Some("1"));
        assert!(matches!(
            result,
            Err(SmartHomeError::CommandNotApplicable {
                command: Command::SetMode,
                appliance: ApplianceType::Light,
            })
        ));
        assert!(!light_on(&controller));
    }

    #[test]
    fn should_report_missing_appliance_before_dispatch() {
        let registry = Registry::new([Light::default().into()]).unwrap();
        let controller = Controller::new(registry, DispatchTable::standard());
        let result = controller.execute_action(ApplianceType::Fan, Command::IncreaseSpeed, None);
        assert!(matches!(
            result,
            Err(SmartHomeError::ApplianceNotFound(ApplianceType::Fan))
        ));
    }

    #[test]
    fn should_report_unsupported_command() {
        let registry = Registry::new([Light::default().into()]).unwrap();
        let table = DispatchTable::builder()
            .handler(Command::Toggle, ApplianceType::Light, crate::dispatch::toggle_light)
            .build()
            .unwrap();
        let controller = Controller::new(registry, table);
        let result = controller.execute_action(ApplianceType::Light, Command::SetMode, None);
        assert!(matches!(
            result,
            Err(SmartHomeError::UnsupportedCommand(Command::SetMode))
        ));
    }

    #[test]
    fn should_surface_type_mismatch_from_miswired_table() {
        let registry = Registry::new([Fan::default().into()]).unwrap();
        let table = DispatchTable::builder()
            .handler(Command::Toggle, ApplianceType::Fan, crate::dispatch::toggle_light)
            .build()
            .unwrap();
        let controller = Controller::new(registry, table);
        let result = controller.execute_action(ApplianceType::Fan, Command::Toggle, None);
        assert!(matches!(result, Err(SmartHomeError::TypeMismatch { .. })));
        assert_eq!(fan_level(&controller), SpeedState::Off);
    }

    #[test]
    fn should_leave_ac_unchanged_on_invalid_mode() {
        let controller = controller();
        controller
            .execute_action(ApplianceType::Ac, Command::SetMode, Some("heat"))
            .unwrap();
        let result = controller.execute_action(ApplianceType::Ac, Command::SetMode, Some("dry"));
        assert!(matches!(result, Err(SmartHomeError::InvalidMode(_))));
        assert_eq!(ac_mode(&controller), AcMode::Heat);
    }

    #[test]
    fn should_display_status_in_registration_order() {
        let controller = controller();
        controller
            .execute_action(ApplianceType::Fan, Command::IncreaseSpeed, None)
            .unwrap();
        controller
            .execute_action(ApplianceType::Light, Command::Toggle, None)
            .unwrap();
        controller
            .execute_action(ApplianceType::Ac, Command::SetMode, Some("1"))
            .unwrap();

        assert_eq!(
            controller.display_status(),
            vec![
                "Light is ON".to_string(),
                "Fan is ON (Speed: LOW - value: 1)".to_string(),
                "Main AC is ON (Mode: COOL - 1)".to_string(),
            ]
        );
    }

    #[test]
    fn should_emit_nothing_when_turning_off_twice() {
        let controller = controller();
        controller
            .execute_action(ApplianceType::Fan, Command::IncreaseSpeed, None)
            .unwrap();
        controller
            .execute_action(ApplianceType::Fan, Command::IncreaseSpeed, None)
            .unwrap();

        let first = controller.perform_system_update();
        assert_eq!(first.len(), 2);
        assert!(controller.perform_system_update().is_empty());
    }

    #[test]
    fn should_serialise_concurrent_dispatch_and_sweep() {
        let controller = Arc::new(controller());
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let controller = Arc::clone(&controller);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        controller
                            .execute_action(ApplianceType::Fan, Command::IncreaseSpeed, None)
                            .unwrap();
                        controller.perform_system_update();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        controller.perform_system_update();
        assert_eq!(fan_level(&controller), SpeedState::Off);
    }
}
