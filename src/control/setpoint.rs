//! Operator setpoints.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Built-in first-run target temperature (°C).
pub const DEFAULT_TEMPERATURE: f32 = 25.0;
/// Built-in first-run target relative humidity (%).
pub const DEFAULT_HUMIDITY: f32 = 55.0;

/// Operator target temperature and humidity.
///
/// Field order is the on-disk record order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Setpoint {
    /// Target temperature (°C).
    pub temperature: f32,
    /// Target relative humidity (%).
    pub humidity: f32,
}

impl Setpoint {
    /// Zero-valued setpoint, returned by the store when nothing was saved.
    pub const UNSET: Self = Self {
        temperature: 0.0,
        humidity: 0.0,
    };

    pub const DEFAULT: Self = Self {
        temperature: DEFAULT_TEMPERATURE,
        humidity: DEFAULT_HUMIDITY,
    };

    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// A zero temperature marks "no saved setpoint".
    ///
    /// A deliberately saved 0 °C target therefore reads back as unset and
    /// gets replaced by the defaults on the next start.
    pub fn is_unset(&self) -> bool {
        self.temperature == 0.0
    }

    /// Range-check before persisting. Rejects, never clamps.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.temperature.is_finite() {
            return Err(Error::Config("setpoint temperature must be finite"));
        }
        if !self.humidity.is_finite() || !(0.0..=100.0).contains(&self.humidity) {
            return Err(Error::Config("setpoint humidity must be within 0..=100"));
        }
        Ok(())
    }
}

impl Default for Setpoint {
    fn default() -> Self {
        Self::DEFAULT
    }
}
