//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory (or the path in
//! `SMARTHOME_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;
use smarthome_domain::ac_mode::OutOfRangeModePolicy;
use smarthome_domain::appliance::AirConditioner;

use crate::scheduler::{MaintenanceSchedule, ScheduleError};

/// Default configuration file name.
pub const DEFAULT_PATH: &str = "smarthome.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Yearly maintenance sweep.
    pub maintenance: MaintenanceConfig,
    /// Appliance settings.
    pub appliances: AppliancesConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// When the maintenance sweep runs, in UTC.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// Run the scheduler at all.
    pub enabled: bool,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Appliance settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppliancesConfig {
    /// Display name of the air conditioner.
    pub ac_name: String,
    /// What to do with numeric AC modes outside `0..=4`.
    pub ac_out_of_range_mode: OutOfRangeModePolicy,
    /// Whether the fan has power.
    pub fan_powered: bool,
}

impl Config {
    /// Load configuration from the file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SMARTHOME_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("SMARTHOME_MAINTENANCE_ENABLED")
            && let Ok(enabled) = val.parse()
        {
            self.maintenance.enabled = enabled;
        }
        if let Some(val) = var("SMARTHOME_AC_NAME") {
            self.appliances.ac_name = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.appliances.ac_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "appliances.ac_name must not be empty".to_string(),
            ));
        }
        self.schedule()?;
        Ok(())
    }

    /// The maintenance schedule described by the `[maintenance]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schedule`] if the date or time is impossible.
    pub fn schedule(&self) -> Result<MaintenanceSchedule, ConfigError> {
        let m = &self.maintenance;
        Ok(MaintenanceSchedule::new(m.month, m.day, m.hour, m.minute)?)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthomed=info,smarthome_app=info".to_string(),
        }
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            month: 1,
            day: 1,
            hour: 1,
            minute: 0,
        }
    }
}

impl Default for AppliancesConfig {
    fn default() -> Self {
        Self {
            ac_name: AirConditioner::DEFAULT_NAME.to_string(),
            ac_out_of_range_mode: OutOfRangeModePolicy::default(),
            fan_powered: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Impossible maintenance date or time.
    #[error("invalid maintenance schedule")]
    Schedule(#[from] ScheduleError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
