//! Controller configuration.
//!
//! All tunable parameters for the greenhouse controller. Loaded from a
//! TOML file when one is present, otherwise the built-in defaults apply.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::alarms::{AlarmLimits, current_limits};
use crate::control::Setpoint;
use crate::error::Error;

/// Default location of the persisted setpoint record.
pub const DEFAULT_SETPOINT_PATH: &str = "setpoints.dat";
/// Default tick cadence.
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 2000;

/// Core controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // --- Persistence ---
    /// Flat binary setpoint record.
    pub setpoint_path: PathBuf,
    /// Setpoint used (and persisted) when none has been saved yet.
    pub default_setpoint: Setpoint,
    /// Optional CSV log of every reading.
    pub data_log: Option<PathBuf>,

    // --- Alarms ---
    pub alarm_limits: AlarmLimits,

    // --- Timing ---
    /// Delay between ticks (milliseconds).
    pub update_interval_ms: u64,
    /// Stop after this many ticks; run until stopped when absent.
    pub max_ticks: Option<u64>,

    // --- Sensors ---
    pub simulation: SimulationConfig,

    // --- Presentation ---
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// A closed value range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub low: f32,
    pub high: f32,
}

impl Range {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Ranges of the random sensor source. Also the scale of the LED bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub temperature: Range,
    pub humidity: Range,
    pub pressure: Range,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            temperature: Range::new(-10.0, 50.0),
            humidity: Range::new(0.0, 100.0),
            pressure: Range::new(975.0, 1016.0),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Also draw the 8×8 LED matrix as ASCII.
    pub show_matrix: bool,
    pub show_alarms: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_matrix: false,
            show_alarms: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            setpoint_path: PathBuf::from(DEFAULT_SETPOINT_PATH),
            default_setpoint: Setpoint::DEFAULT,
            data_log: None,

            alarm_limits: current_limits(),

            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS, // 0.5 Hz
            max_ticks: None,

            simulation: SimulationConfig::default(),

            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ControllerConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let config: ControllerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

        Ok(config)
    }

    /// Load `path` if given and usable, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load(path) {
                Ok(config) => {
                    info!("Config loaded from {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load {}: {} - using defaults", path.display(), e);
                }
            }
        } else {
            info!("No config file given - using defaults");
        }
        Self::default()
    }

    /// Range-check every field. Rejects invalid values rather than clamping.
    pub fn validate(&self) -> Result<(), Error> {
        if !(100..=60_000).contains(&self.update_interval_ms) {
            return Err(Error::Config("update_interval_ms must be within 100..=60000"));
        }
        if self.max_ticks == Some(0) {
            return Err(Error::Config("max_ticks must be at least 1"));
        }
        self.default_setpoint.validate()?;
        if self.default_setpoint.is_unset() {
            return Err(Error::Config("default_setpoint temperature must be non-zero"));
        }
        self.alarm_limits.validate()?;
        for range in [
            self.simulation.temperature,
            self.simulation.humidity,
            self.simulation.pressure,
        ] {
            if !range.low.is_finite() || !range.high.is_finite() || range.low >= range.high {
                return Err(Error::Config("simulation ranges need low < high"));
            }
        }
        if self.setpoint_path.as_os_str().is_empty() {
            return Err(Error::Config("setpoint_path must not be empty"));
        }
        Ok(())
    }

    pub fn update_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.update_interval_ms)
    }
}
