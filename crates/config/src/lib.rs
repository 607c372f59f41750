//! Settings models and loaders for the sailing calculator.
//!
//! Settings are the persistent preferences: which unit system the boater
//! works in, the numeric bounds enforced on input, and the default field
//! values offered when an input is omitted. They are loaded from a YAML or
//! TOML file and can be written back so preferences survive between runs.

use std::fs::{self, File};
use std::path::Path;

use sail_core::UnitSystem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ceiling on the fuel consumption rate accepted from input (liters/hour).
/// Unlike the other bounds this one is not configurable.
pub const MAX_FUEL_CONSUMPTION_L_PER_H: f64 = 50.0;

/// Numeric bounds enforced on user input before the planner is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_distance: f64,
    pub max_sail_speed: f64,
    pub max_motor_speed: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_distance: 1000.0,
            max_sail_speed: 20.0,
            max_motor_speed: 30.0,
        }
    }
}

/// Default field values used when the caller omits an input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Departure time as "HH:mm".
    pub start_time: String,
    /// Desired arrival time as "HH:mm".
    pub arrival_time: String,
    pub distance: f64,
    pub sail_speed: f64,
    pub motor_speed: f64,
    /// Liters per hour of motoring.
    pub fuel_consumption: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            start_time: "08:00".to_string(),
            arrival_time: "12:00".to_string(),
            distance: 25.0,
            sail_speed: 5.0,
            motor_speed: 8.0,
            fuel_consumption: 5.0,
        }
    }
}

/// Persistent preferences: unit system, bounds, and default field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub unit_system: UnitSystem,
    pub limits: Limits,
    pub defaults: Defaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Nautical,
            limits: Limits::default(),
            defaults: Defaults::default(),
        }
    }
}

/// Errors that can occur while loading or saving settings files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to serialize TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

/// Load settings from a YAML or TOML file, chosen by extension.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Save settings back to disk, creating parent directories as needed.
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = if is_toml(path) {
        toml::to_string_pretty(settings)?
    } else {
        serde_yaml::to_string(settings)?
    };
    fs::write(path, contents)?;
    Ok(())
}
