//! The set of currently active alarms.
//!
//! Backed by a fixed-capacity `heapless::Vec`: records stay in insertion
//! order (oldest-active first), appends are O(1), and removal shifts the
//! tail down so the remaining order is undisturbed. Running out of room
//! is the "allocation failure" case and leaves the set untouched.

use serde::Serialize;

use super::{AlarmCode, AlarmRecord};
use crate::error::AlarmError;
use crate::sensors::Timestamp;

/// One slot per alarm code.
pub const ALARM_CAPACITY: usize = AlarmCode::COUNT;

/// Ordered collection of active alarms, at most one record per code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlarmSet<const N: usize = ALARM_CAPACITY> {
    records: heapless::Vec<AlarmRecord, N>,
}

impl<const N: usize> AlarmSet<N> {
    pub const fn new() -> Self {
        Self {
            records: heapless::Vec::new(),
        }
    }

    /// Ensure a record for `code` exists.
    ///
    /// Returns `Ok(true)` when a record was appended and `Ok(false)` when
    /// the code was already active (the original record is kept).
    pub fn set_one(
        &mut self,
        code: AlarmCode,
        triggered_at: Timestamp,
        value: f32,
    ) -> Result<bool, AlarmError> {
        if self.contains(code) {
            return Ok(false);
        }
        self.records
            .push(AlarmRecord {
                code,
                triggered_at,
                value,
            })
            .map_err(|_| AlarmError::CapacityExhausted { code, capacity: N })?;
        Ok(true)
    }

    /// Ensure no record for `code` exists. Returns the removed record.
    pub fn clear_one(&mut self, code: AlarmCode) -> Option<AlarmRecord> {
        let index = self.records.iter().position(|r| r.code == code)?;
        Some(self.records.remove(index))
    }

    pub fn contains(&self, code: AlarmCode) -> bool {
        self.records.iter().any(|r| r.code == code)
    }

    pub fn get(&self, code: AlarmCode) -> Option<&AlarmRecord> {
        self.records.iter().find(|r| r.code == code)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, AlarmRecord> {
        self.records.iter()
    }

    /// Active codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = AlarmCode> + '_ {
        self.records.iter().map(|r| r.code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<const N: usize> Default for AlarmSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a AlarmSet<N> {
    type Item = &'a AlarmRecord;
    type IntoIter = core::slice::Iter<'a, AlarmRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
