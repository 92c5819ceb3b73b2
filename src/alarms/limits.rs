//! Alarm limit provider.

use serde::{Deserialize, Serialize};

use super::{AlarmCode, Bound};
use crate::error::Error;
use crate::sensors::Reading;

pub const UPPER_TEMPERATURE: f32 = 30.0;
pub const LOWER_TEMPERATURE: f32 = 10.0;
pub const UPPER_HUMIDITY: f32 = 70.0;
pub const LOWER_HUMIDITY: f32 = 25.0;
pub const UPPER_PRESSURE: f32 = 1016.0;
pub const LOWER_PRESSURE: f32 = 985.0;

/// High/low thresholds per quantity. An immutable configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlarmLimits {
    pub high_temp: f32,
    pub low_temp: f32,
    pub high_humidity: f32,
    pub low_humidity: f32,
    pub high_pressure: f32,
    pub low_pressure: f32,
}

/// The built-in limits.
pub const fn current_limits() -> AlarmLimits {
    AlarmLimits {
        high_temp: UPPER_TEMPERATURE,
        low_temp: LOWER_TEMPERATURE,
        high_humidity: UPPER_HUMIDITY,
        low_humidity: LOWER_HUMIDITY,
        high_pressure: UPPER_PRESSURE,
        low_pressure: LOWER_PRESSURE,
    }
}

impl Default for AlarmLimits {
    fn default() -> Self {
        current_limits()
    }
}

impl AlarmLimits {
    /// Threshold guarding `code`.
    pub fn threshold(&self, code: AlarmCode) -> f32 {
        match code {
            AlarmCode::HighTemp => self.high_temp,
            AlarmCode::LowTemp => self.low_temp,
            AlarmCode::HighHumidity => self.high_humidity,
            AlarmCode::LowHumidity => self.low_humidity,
            AlarmCode::HighPressure => self.high_pressure,
            AlarmCode::LowPressure => self.low_pressure,
        }
    }

    /// Whether `reading` violates the bound for `code`.
    ///
    /// Bounds are inclusive: a value equal to the limit is a breach.
    /// NaN never breaches.
    pub fn is_breached(&self, code: AlarmCode, reading: &Reading) -> bool {
        let value = reading.value(code.quantity());
        let limit = self.threshold(code);
        match code.bound() {
            Bound::Upper => value >= limit,
            Bound::Lower => value <= limit,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        let pairs = [
            (self.high_temp, self.low_temp, "high_temp must be above low_temp"),
            (
                self.high_humidity,
                self.low_humidity,
                "high_humidity must be above low_humidity",
            ),
            (
                self.high_pressure,
                self.low_pressure,
                "high_pressure must be above low_pressure",
            ),
        ];
        for (high, low, msg) in pairs {
            if !high.is_finite() || !low.is_finite() || high <= low {
                return Err(Error::Config(msg));
            }
        }
        Ok(())
    }
}
