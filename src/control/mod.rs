//! Control decision engine.
//!
//! Turns the operator [`Setpoint`] and the latest reading into actuator
//! states. Stateless: the same inputs always give the same outputs.

pub mod decision;
pub mod setpoint;

pub use decision::{ControlState, decide};
pub use setpoint::Setpoint;
