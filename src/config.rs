use crate::core::DEFAULT_THRESHOLD;
use crate::models::BookingSlot;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub booking: BookingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    /// Minimum match ratio for a Match decision, in [0, 1]
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_threshold() -> f64 { DEFAULT_THRESHOLD }
fn default_max_upload_bytes() -> usize { 10 * 1024 * 1024 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// Role catalog file; the built-in catalog is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingSettings {
    #[serde(default = "default_slots")]
    pub slots: Vec<SlotSettings>,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            slots: default_slots(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotSettings {
    pub date: String,
    pub time: String,
}

impl BookingSettings {
    /// Open slots for the registry
    pub fn to_slots(&self) -> Vec<BookingSlot> {
        self.slots
            .iter()
            .map(|slot| BookingSlot {
                date: slot.date.clone(),
                time: slot.time.clone(),
                available: true,
            })
            .collect()
    }
}

fn default_slots() -> Vec<SlotSettings> {
    [
        ("2024-11-10", "09:00"),
        ("2024-11-10", "10:00"),
        ("2024-11-11", "09:00"),
        ("2024-11-11", "10:00"),
        ("2024-11-12", "14:00"),
        ("2024-11-12", "15:00"),
    ]
    .iter()
    .map(|(date, time)| SlotSettings {
        date: date.to_string(),
        time: time.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RESUME__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RESUME__ANALYSIS__THRESHOLD -> analysis.threshold
            .add_source(environment())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.analysis.threshold) {
            return Err(ConfigError::Message(format!(
                "analysis.threshold must be between 0 and 1, got {}",
                self.analysis.threshold
            )));
        }

        if let Some(slot) = self
            .booking
            .slots
            .iter()
            .find(|slot| slot.date.trim().is_empty() || slot.time.trim().is_empty())
        {
            return Err(ConfigError::Message(format!(
                "booking slot needs both date and time, got date='{}' time='{}'",
                slot.date, slot.time
            )));
        }

        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RESUME")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.analysis.threshold, 0.7);
        assert_eq!(settings.analysis.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(settings.booking.slots.len(), 6);
        assert!(settings.catalog.path.is_none());
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        let mut settings = Settings::default();
        settings.analysis.threshold = 1.2;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_slot() {
        let mut settings = Settings::default();
        settings.booking.slots.push(SlotSettings {
            date: "2024-11-13".to_string(),
            time: " ".to_string(),
        });
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[analysis]\nthreshold = 0.6\n\n[[booking.slots]]\ndate = \"2025-01-06\"\ntime = \"11:00\"\n"
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.analysis.threshold, 0.6);
        assert_eq!(settings.booking.to_slots().len(), 1);
        assert!(settings.booking.to_slots()[0].available);
        assert_eq!(settings.server.port, 8080);
    }
}
