//! Reading acquisition: turns a [`SensorPort`] into one [`Reading`] per tick.
//!
//! The controller never knows whether the port is backed by real hardware
//! or by the [`SimulatedSensor`]; it only consumes the values.

pub mod simulated;

use serde::{Deserialize, Serialize};

use crate::app::ports::SensorPort;

pub use simulated::SimulatedSensor;

/// Wall-clock instant attached to readings and alarm records.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A point-in-time environmental reading.
///
/// Produced fresh each tick and owned by that tick; never mutated after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: Timestamp,
    /// Air temperature (°C).
    pub temperature: f32,
    /// Relative humidity (%).
    pub humidity: f32,
    /// Barometric pressure (mbar).
    pub pressure: f32,
}

impl Reading {
    pub fn new(timestamp: Timestamp, temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            timestamp,
            temperature,
            humidity,
            pressure,
        }
    }

    /// Value of one monitored quantity.
    pub fn value(&self, quantity: Quantity) -> f32 {
        match quantity {
            Quantity::Temperature => self.temperature,
            Quantity::Humidity => self.humidity,
            Quantity::Pressure => self.pressure,
        }
    }
}

/// The three quantities the sensor source supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Temperature,
    Humidity,
    Pressure,
}

/// Sample every quantity once and stamp the result with `now`.
pub fn acquire(sensor: &mut impl SensorPort, now: Timestamp) -> Reading {
    Reading {
        timestamp: now,
        temperature: sensor.temperature(),
        humidity: sensor.humidity(),
        pressure: sensor.pressure(),
    }
}
