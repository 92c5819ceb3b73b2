//! Inbound commands to the controller.
//!
//! Actions requested by the operator side (console, host process) that
//! the [`Controller`](super::service::Controller) interprets and acts upon.

use crate::control::Setpoint;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Validate, persist and adopt a new setpoint.
    UpdateSetpoint(Setpoint),

    /// Re-read the setpoint file (e.g. after an external edit).
    ReloadSetpoint,

    /// Ask the run loop to exit after the current tick.
    Stop,
}
