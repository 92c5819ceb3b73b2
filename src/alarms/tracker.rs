//! Alarm tracker: one tick of alarm evaluation.
//!
//! Every code is evaluated independently through the same primitive:
//!
//! 1. Breach → ensure a record `{code, reading time, value}` exists.
//! 2. No breach → ensure no record for the code exists.
//!
//! Each state change is returned as an [`AlarmTransition`] so callers can
//! forward it to an event sink. A record that cannot be stored is
//! reported as [`AlarmTransition::Dropped`]; the rest of the set is
//! still updated and nothing already stored is lost.

use log::{error, info, warn};

use super::{AlarmCode, AlarmLimits, AlarmRecord, AlarmSet};
use crate::error::AlarmError;
use crate::sensors::Reading;

/// An observable change of one alarm code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlarmTransition {
    /// Inactive → Active.
    Raised(AlarmRecord),
    /// Active → Inactive. Carries the record that was removed.
    Cleared(AlarmRecord),
    /// Breach detected but no room to record it; the code stays inactive.
    Dropped {
        code: AlarmCode,
        value: f32,
        error: AlarmError,
    },
}

impl AlarmTransition {
    pub fn code(&self) -> AlarmCode {
        match self {
            Self::Raised(r) | Self::Cleared(r) => r.code,
            Self::Dropped { code, .. } => *code,
        }
    }
}

/// At most one transition per code per tick.
pub type Transitions = heapless::Vec<AlarmTransition, { AlarmCode::COUNT }>;

/// Result of [`update_alarms`]: the next set plus what changed.
#[derive(Debug, Clone)]
pub struct AlarmUpdate<const N: usize> {
    pub alarms: AlarmSet<N>,
    pub transitions: Transitions,
}

impl<const N: usize> AlarmUpdate<N> {
    /// True if any breach could not be recorded this tick.
    pub fn has_dropped(&self) -> bool {
        self.transitions
            .iter()
            .any(|t| matches!(t, AlarmTransition::Dropped { .. }))
    }
}

/// Produce the next alarm set from the previous one.
pub fn update_alarms<const N: usize>(
    mut alarms: AlarmSet<N>,
    limits: &AlarmLimits,
    reading: &Reading,
) -> AlarmUpdate<N> {
    let mut transitions = Transitions::new();
    for code in AlarmCode::ALL {
        let breached = limits.is_breached(code, reading);
        if let Some(t) = evaluate_one(&mut alarms, code, breached, reading) {
            // One transition per code; the capacity matches the code count.
            let _ = transitions.push(t);
        }
    }
    AlarmUpdate {
        alarms,
        transitions,
    }
}

/// Set or clear one code based on a breach condition.
pub fn evaluate_one<const N: usize>(
    alarms: &mut AlarmSet<N>,
    code: AlarmCode,
    breached: bool,
    reading: &Reading,
) -> Option<AlarmTransition> {
    if breached {
        let value = reading.value(code.quantity());
        match alarms.set_one(code, reading.timestamp, value) {
            Ok(true) => {
                error!("ALARM SET: {code} ({value:.1})");
                alarms.get(code).copied().map(AlarmTransition::Raised)
            }
            Ok(false) => None,
            Err(e) => {
                warn!("ALARM DROPPED: {code} ({value:.1}): {e}");
                Some(AlarmTransition::Dropped {
                    code,
                    value,
                    error: e,
                })
            }
        }
    } else {
        alarms.clear_one(code).map(|record| {
            info!("ALARM CLEARED: {code}");
            AlarmTransition::Cleared(record)
        })
    }
}
