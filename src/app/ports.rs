//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (sensor source, clock, display, setpoint file, event
//! sinks) implement these traits. The [`Controller`](super::service::Controller)
//! consumes them via generics, so the domain core never touches hardware
//! or the filesystem directly.

use core::time::Duration;

use log::warn;

use crate::control::Setpoint;
use crate::error::PersistenceError;
use crate::sensors::{Reading, Timestamp};

use super::events::{AppEvent, TickReport};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one value per call, hardware-backed or simulated.
pub trait SensorPort {
    /// Air temperature (°C).
    fn temperature(&mut self) -> f32;

    /// Relative humidity (%).
    fn humidity(&mut self) -> f32;

    /// Barometric pressure (mbar).
    fn pressure(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Wall-clock time and tick pacing.
pub trait ClockPort {
    fn now(&self) -> Timestamp;

    /// Block the control thread between ticks.
    fn sleep(&self, duration: Duration);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → renderer)
// ───────────────────────────────────────────────────────────────

/// Receives the per-tick data any renderer needs: reading, setpoint,
/// controls, and the active alarm set.
pub trait DisplayPort {
    fn render(&mut self, report: &TickReport);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Setpoint port (driven adapter: domain ↔ persisted setpoints)
// ───────────────────────────────────────────────────────────────

/// Loads and persists operator setpoints.
pub trait SetpointPort {
    /// Fail-soft load. Returns [`Setpoint::UNSET`] when nothing usable is
    /// stored; never errors.
    fn load(&self) -> Setpoint;

    /// Overwrite the stored setpoint.
    fn save(&self, setpoint: &Setpoint) -> Result<(), PersistenceError>;

    /// Load, or on first run substitute `defaults` and persist them.
    ///
    /// A failed save is logged and the defaults are still returned.
    fn resolve_targets(&self, defaults: Setpoint) -> Setpoint {
        let loaded = self.load();
        if !loaded.is_unset() {
            return loaded;
        }
        if let Err(e) = self.save(&defaults) {
            warn!("Could not persist default setpoints: {e}");
        }
        defaults
    }
}

// ───────────────────────────────────────────────────────────────
// Reading log port
// ───────────────────────────────────────────────────────────────

/// Append-only history of readings.
pub trait ReadingLogPort {
    fn append(&mut self, reading: &Reading) -> Result<(), PersistenceError>;
}
