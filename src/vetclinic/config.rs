use crate::error::{ClinicError, Result};
use crate::schedule::ClinicHours;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Clinic configuration, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClinicConfig {
    /// Number of patient slots
    pub max_patients: usize,

    /// Number of appointment slots
    pub max_appointments: usize,

    /// Patient data file loaded at startup
    pub patient_file: PathBuf,

    /// Appointment data file loaded at startup
    pub appointment_file: PathBuf,

    /// Bookable hours
    pub hours: ClinicHours,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            max_patients: 20,
            max_appointments: 50,
            patient_file: PathBuf::from("patientData.txt"),
            appointment_file: PathBuf::from("appointmentData.txt"),
            hours: ClinicHours::default(),
        }
    }
}

impl ClinicConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ClinicConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_patients == 0 || self.max_appointments == 0 {
            return Err(ClinicError::Config(
                "store capacities must be at least 1".to_string(),
            ));
        }
        let hours = &self.hours;
        if hours.first_hour > hours.last_hour || hours.last_hour > 23 || hours.last_minute > 59 {
            return Err(ClinicError::Config(format!(
                "invalid clinic hours: {:02}:00 to {:02}:{:02}",
                hours.first_hour, hours.last_hour, hours.last_minute
            )));
        }
        if hours.interval_minutes == 0 || hours.interval_minutes > 60 {
            return Err(ClinicError::Config(format!(
                "appointment interval must be 1-60 minutes, got {}",
                hours.interval_minutes
            )));
        }
        Ok(())
    }
}
