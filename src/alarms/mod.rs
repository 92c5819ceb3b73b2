//! Alarm tracking.
//!
//! Six alarm codes (high/low for temperature, humidity and pressure) are
//! each a two-state machine: **Inactive → Active** on breach, **Active →
//! Inactive** on recovery. Membership in the [`AlarmSet`] *is* the state,
//! so the set holds at most one record per code.
//!
//! ```text
//!   AlarmLimits ──┐
//!                 ├──▶ update_alarms(old set) ──▶ new set + transitions
//!   Reading ──────┘
//! ```

pub mod limits;
pub mod set;
pub mod tracker;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::sensors::{Quantity, Timestamp};

pub use limits::{AlarmLimits, current_limits};
pub use set::{ALARM_CAPACITY, AlarmSet};
pub use tracker::{AlarmTransition, AlarmUpdate, Transitions, update_alarms};

/// Label shown by presentation layers when the set is empty.
pub const NO_ALARMS_LABEL: &str = "No Alarms";

/// A discrete out-of-range condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmCode {
    HighTemp,
    LowTemp,
    HighHumidity,
    LowHumidity,
    HighPressure,
    LowPressure,
}

/// Which side of the quantity a code guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Breached when the value is at or above the limit.
    Upper,
    /// Breached when the value is at or below the limit.
    Lower,
}

impl AlarmCode {
    pub const COUNT: usize = 6;

    /// Evaluation order of the tracker.
    pub const ALL: [Self; Self::COUNT] = [
        Self::HighTemp,
        Self::LowTemp,
        Self::HighHumidity,
        Self::LowHumidity,
        Self::HighPressure,
        Self::LowPressure,
    ];

    pub const fn quantity(self) -> Quantity {
        match self {
            Self::HighTemp | Self::LowTemp => Quantity::Temperature,
            Self::HighHumidity | Self::LowHumidity => Quantity::Humidity,
            Self::HighPressure | Self::LowPressure => Quantity::Pressure,
        }
    }

    pub const fn bound(self) -> Bound {
        match self {
            Self::HighTemp | Self::HighHumidity | Self::HighPressure => Bound::Upper,
            Self::LowTemp | Self::LowHumidity | Self::LowPressure => Bound::Lower,
        }
    }

    /// Fixed human-readable label. Presentation only.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighTemp => "HighTemperature",
            Self::LowTemp => "LowTemperature",
            Self::HighHumidity => "HighHumidity",
            Self::LowHumidity => "LowHumidity",
            Self::HighPressure => "HighPressure",
            Self::LowPressure => "LowPressure",
        }
    }

    /// Console banner used by the alarm list.
    pub const fn announcement(self) -> &'static str {
        match self {
            Self::HighTemp => "HIGH TEMPERATURE DETECTED",
            Self::LowTemp => "LOW TEMPERATURE DETECTED",
            Self::HighHumidity => "HIGH HUMIDITY DETECTED",
            Self::LowHumidity => "LOW HUMIDITY DETECTED",
            Self::HighPressure => "HIGH PRESSURE DETECTED",
            Self::LowPressure => "LOW PRESSURE DETECTED",
        }
    }
}

impl fmt::Display for AlarmCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One active alarm: what tripped, when, and the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlarmRecord {
    pub code: AlarmCode,
    pub triggered_at: Timestamp,
    pub value: f32,
}
