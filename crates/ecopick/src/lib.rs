//! Pickup intake rules for the EcoPick used-clothing collection service.
//!
//! The crate exposes the settlement calculator, the service-area check, the
//! pickup date rule, and the intake service that relays accepted requests.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
