//! # smarthome-app
//!
//! Application layer — routes `(appliance type, command, value)` requests
//! to appliance state transitions.
//!
//! ## Responsibilities
//! - [`registry::Registry`] — the fixed set of appliances, one per type
//! - [`dispatch::DispatchTable`] — handlers keyed by `(Command, ApplianceType)`
//! - [`controller::Controller`] — the collaborator-facing entry points
//!   (`execute_action`, `turn_off_all_appliances`, `display_status`,
//!   `perform_system_update`), guarding all mutation behind one lock
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only (plus `tracing`).
//! Knows nothing about menus, timers, or configuration files.

pub mod controller;
pub mod dispatch;
pub mod registry;
