//! # smarthomed
//!
//! Composition root for the smarthome appliance controller.
//!
//! ## Responsibilities
//! - Load configuration (TOML file plus environment overrides)
//! - Build the appliance registry and the controller
//! - Run the yearly maintenance scheduler
//! - Run the interactive text menu over stdin/stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no appliance logic belongs here.

pub mod config;
pub mod menu;
pub mod scheduler;

use smarthome_app::controller::Controller;
use smarthome_app::dispatch::DispatchTable;
use smarthome_app::registry::Registry;
use smarthome_domain::appliance::{AirConditioner, Fan, Light};
use smarthome_domain::error::SmartHomeError;

use crate::config::AppliancesConfig;

/// Build the light, fan, and air-conditioner controller from configuration.
///
/// # Errors
///
/// Returns [`SmartHomeError::DuplicateAppliance`] if the registry would be
/// ambiguous.
pub fn build_controller(config: &AppliancesConfig) -> Result<Controller, SmartHomeError> {
    let ac = AirConditioner::new(config.ac_name.clone())
        .with_out_of_range_policy(config.ac_out_of_range_mode);
    let registry = Registry::new([
        Light::default().into(),
        Fan::with_power(config.fan_powered).into(),
        ac.into(),
    ])?;
    Ok(Controller::new(registry, DispatchTable::standard()))
}
