//! Setpoint file adapter.
//!
//! Persists the operator [`Setpoint`] as a fixed 8-byte record:
//!
//! ```text
//!   offset 0..4   temperature   f32, little-endian
//!   offset 4..8   humidity      f32, little-endian
//! ```
//!
//! No header and no version. postcard encodes `f32` as its four
//! little-endian bytes, so the struct's serde layout *is* the file layout.
//!
//! Loading fails soft: a missing, short, long or unreadable file yields
//! [`Setpoint::UNSET`], as does a stored zero or non-finite temperature.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::app::ports::SetpointPort;
use crate::control::Setpoint;
use crate::error::PersistenceError;

/// On-disk record size.
pub const RECORD_SIZE: usize = 8;

/// Read the stored setpoint, or [`Setpoint::UNSET`] if there is none.
pub fn load(path: impl AsRef<Path>) -> Setpoint {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            debug!("Setpoint file {} not readable: {e}", path.display());
            return Setpoint::UNSET;
        }
    };
    if bytes.len() != RECORD_SIZE {
        warn!(
            "Setpoint file {} is {} bytes, expected {RECORD_SIZE}; ignoring",
            path.display(),
            bytes.len()
        );
        return Setpoint::UNSET;
    }
    match postcard::from_bytes::<Setpoint>(&bytes) {
        Ok(sp) if sp.temperature.is_finite() && sp.humidity.is_finite() && !sp.is_unset() => sp,
        _ => Setpoint::UNSET,
    }
}

/// Overwrite the setpoint file with `setpoint`.
pub fn save(path: impl AsRef<Path>, setpoint: &Setpoint) -> Result<(), PersistenceError> {
    let mut record = [0u8; RECORD_SIZE];
    let encoded = postcard::to_slice(setpoint, &mut record).map_err(|_| PersistenceError::Encode)?;
    if encoded.len() != RECORD_SIZE {
        return Err(PersistenceError::Encode);
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(&record)?;
    file.flush()?;
    Ok(())
}

/// Load, or on first run persist and return the built-in defaults.
pub fn resolve_targets(path: impl AsRef<Path>) -> Setpoint {
    SetpointFile::new(path.as_ref()).resolve_targets(Setpoint::DEFAULT)
}

/// [`SetpointPort`] over a file path.
#[derive(Debug, Clone)]
pub struct SetpointFile {
    path: PathBuf,
}

impl SetpointFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SetpointPort for SetpointFile {
    fn load(&self) -> Setpoint {
        load(&self.path)
    }

    fn save(&self, setpoint: &Setpoint) -> Result<(), PersistenceError> {
        save(&self.path, setpoint)?;
        info!(
            "Setpoint saved to {}: T={:.1} H={:.1}",
            self.path.display(),
            setpoint.temperature,
            setpoint.humidity
        );
        Ok(())
    }
}
