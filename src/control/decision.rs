//! Heater / humidifier decision.
//!
//! Plain threshold comparison with no deadband: a reading equal to the
//! target switches the actuator off.

use serde::{Deserialize, Serialize};

use super::Setpoint;
use crate::sensors::Reading;

/// Actuator outputs for one tick. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub heater_on: bool,
    pub humidifier_on: bool,
}

impl ControlState {
    pub const ALL_OFF: Self = Self {
        heater_on: false,
        humidifier_on: false,
    };
}

/// Compute actuator states from the target and the current reading.
pub fn decide(target: &Setpoint, current: &Reading) -> ControlState {
    ControlState {
        heater_on: current.temperature < target.temperature,
        humidifier_on: current.humidity < target.humidity,
    }
}
