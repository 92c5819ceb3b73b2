//! Outbound application events.
//!
//! The [`Controller`](super::service::Controller) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them.

use serde::Serialize;

use crate::alarms::{AlarmCode, AlarmLimits, AlarmRecord, AlarmSet, AlarmTransition};
use crate::control::{ControlState, Setpoint};
use crate::error::AlarmError;
use crate::sensors::Reading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The controller has started with these targets and limits.
    Started {
        setpoint: Setpoint,
        limits: AlarmLimits,
    },

    /// Per-tick snapshot.
    Telemetry(TickReport),

    /// An alarm code went active.
    AlarmRaised(AlarmRecord),

    /// An active alarm recovered.
    AlarmCleared(AlarmRecord),

    /// A breach could not be recorded; prior alarm state was kept.
    AlarmDropped {
        code: AlarmCode,
        value: f32,
        error: AlarmError,
    },

    /// The operator setpoint was saved and adopted.
    SetpointChanged { from: Setpoint, to: Setpoint },

    /// The run loop exited.
    Stopped { ticks: u64 },
}

impl From<AlarmTransition> for AppEvent {
    fn from(t: AlarmTransition) -> Self {
        match t {
            AlarmTransition::Raised(r) => Self::AlarmRaised(r),
            AlarmTransition::Cleared(r) => Self::AlarmCleared(r),
            AlarmTransition::Dropped { code, value, error } => {
                Self::AlarmDropped { code, value, error }
            }
        }
    }
}

/// Everything a renderer needs for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// 1-based tick number.
    pub tick: u64,
    pub reading: Reading,
    pub setpoint: Setpoint,
    pub controls: ControlState,
    pub alarms: AlarmSet,
}
