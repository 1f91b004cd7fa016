//! # smarthome-domain
//!
//! Pure domain model for the smarthome appliance controller.
//!
//! ## Responsibilities
//! - Foundational value types: appliance types, commands, fan speeds, AC modes
//! - Define **Appliances** (light, fan, air conditioner) and their state machines
//! - Define **Events** (transition and notice records produced by every operation)
//! - Define the error taxonomy shared by the whole workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO, not even
//! logging. Operations return [`event::Event`]s and callers decide how to
//! report them.

#[macro_use]
mod value;

pub mod error;

pub mod ac_mode;
pub mod appliance;
pub mod appliance_type;
pub mod command;
pub mod event;
pub mod speed;
