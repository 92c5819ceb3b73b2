//! CSV reading log.
//!
//! Appends one line per reading:
//!
//! ```text
//! \nWed,Apr,17,10:22:33,2024, 21.3, 48.0,1003.2
//! ```
//!
//! The file is opened in append mode for each write and closed again, so
//! an external rotation or deletion between ticks is harmless.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::warn;

use crate::app::ports::ReadingLogPort;
use crate::error::PersistenceError;
use crate::sensors::Reading;

/// Format one CSV record (including its leading newline).
pub fn format_record(reading: &Reading) -> String {
    let stamp = reading
        .timestamp
        .with_timezone(&Local)
        .format("%a,%b,%e,%H:%M:%S,%Y");
    format!(
        "\n{stamp},{:5.1},{:5.1},{:6.1}",
        reading.temperature, reading.humidity, reading.pressure
    )
}

/// Append-only CSV file of readings.
#[derive(Debug, Clone)]
pub struct ReadingLog {
    path: PathBuf,
}

impl ReadingLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReadingLogPort for ReadingLog {
    fn append(&mut self, reading: &Reading) -> Result<(), PersistenceError> {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(format_record(reading).as_bytes()));
        result.map_err(|e| {
            warn!("Can't append to {}: {e}", self.path.display());
            PersistenceError::from(e)
        })
    }
}
