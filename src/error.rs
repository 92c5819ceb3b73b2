//! Unified error types for the greenhouse controller.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! control loop's error handling uniform. All variants are `Copy` so they
//! can ride along in alarm transitions and events without allocation.

use core::fmt;

use crate::alarms::AlarmCode;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A flat file (setpoints, reading log) could not be read or written.
    Persistence(PersistenceError),
    /// An alarm record could not be stored.
    Alarm(AlarmError),
    /// A display helper was given an invalid bar, level or pixel.
    Display(DisplayError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persistence(e) => write!(f, "persistence: {e}"),
            Self::Alarm(e) => write!(f, "alarm: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Persistence errors
// ---------------------------------------------------------------------------

/// Failures of the flat-file persistence paths (setpoints, reading log).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceError {
    /// The file could not be opened, read or written.
    Io(std::io::ErrorKind),
    /// The record could not be encoded into its fixed-size layout.
    Encode,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(kind) => write!(f, "I/O error ({kind})"),
            Self::Encode => write!(f, "record encoding failed"),
        }
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.kind())
    }
}

impl From<PersistenceError> for Error {
    fn from(e: PersistenceError) -> Self {
        Self::Persistence(e)
    }
}

// ---------------------------------------------------------------------------
// Alarm storage errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmError {
    /// No room left for a new record; the existing set is unchanged.
    CapacityExhausted { code: AlarmCode, capacity: usize },
}

impl fmt::Display for AlarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExhausted { code, capacity } => {
                write!(f, "no room for {code} (capacity {capacity})")
            }
        }
    }
}

impl From<AlarmError> for Error {
    fn from(e: AlarmError) -> Self {
        Self::Alarm(e)
    }
}

// ---------------------------------------------------------------------------
// Display helper errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Bar (column) index outside `0..8`.
    BarOutOfRange(i32),
    /// Bar level below zero.
    LevelOutOfRange(i32),
    /// Pixel coordinate outside the matrix.
    PixelOutOfRange { row: i32, col: i32 },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BarOutOfRange(bar) => write!(f, "bar {bar} out of range"),
            Self::LevelOutOfRange(level) => write!(f, "bar level {level} out of range"),
            Self::PixelOutOfRange { row, col } => {
                write!(f, "pixel ({row}, {col}) out of range")
            }
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
