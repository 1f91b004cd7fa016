//! Appliances — the controllable devices and their shared contract.
//!
//! Each concrete appliance owns its state and exposes type-specific mutators.
//! [`Appliance`] is the closed set of variants the registry stores; handlers
//! match on it to reach the concrete type.

mod air_conditioner;
mod fan;
mod light;

pub use air_conditioner::AirConditioner;
pub use fan::Fan;
pub use light::Light;

use crate::appliance_type::ApplianceType;
use crate::event::Event;

/// Capabilities every appliance offers.
pub trait Controllable {
    /// The type tag, fixed for the instance's lifetime.
    fn appliance_type(&self) -> ApplianceType;

    /// Whether the appliance is currently running. Derived from its state.
    fn is_on(&self) -> bool;

    /// Drive the appliance to its off state.
    ///
    /// Idempotent: on an appliance that is already off this changes nothing
    /// and returns no events.
    fn turn_off(&mut self) -> Vec<Event>;

    /// One-line status description.
    fn status(&self) -> String;
}

/// Wrapper enum for the concrete appliance types.
#[derive(Debug, Clone)]
pub enum Appliance {
    Light(Light),
    Fan(Fan),
    AirConditioner(AirConditioner),
}

impl Controllable for Appliance {
    fn appliance_type(&self) -> ApplianceType {
        match self {
            Self::Light(a) => a.appliance_type(),
            Self::Fan(a) => a.appliance_type(),
            Self::AirConditioner(a) => a.appliance_type(),
        }
    }

    fn is_on(&self) -> bool {
        match self {
            Self::Light(a) => a.is_on(),
            Self::Fan(a) => a.is_on(),
            Self::AirConditioner(a) => a.is_on(),
        }
    }

    fn turn_off(&mut self) -> Vec<Event> {
        match self {
            Self::Light(a) => a.turn_off(),
            Self::Fan(a) => a.turn_off(),
            Self::AirConditioner(a) => a.turn_off(),
        }
    }

    fn status(&self) -> String {
        match self {
            Self::Light(a) => a.status(),
            Self::Fan(a) => a.status(),
            Self::AirConditioner(a) => a.status(),
        }
    }
}

impl From<Light> for Appliance {
    fn from(light: Light) -> Self {
        Self::Light(light)
    }
}

impl From<Fan> for Appliance {
    fn from(fan: Fan) -> Self {
        Self::Fan(fan)
    }
}

impl From<AirConditioner> for Appliance {
    fn from(ac: AirConditioner) -> Self {
        Self::AirConditioner(ac)
    }
}
