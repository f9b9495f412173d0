//! Configuration management for the golf weather application
//!
//! An optional TOML file layered under `GOLFWEATHER_*` environment variables.
//! Thresholds, provider endpoints, logging and display defaults live here.

use crate::GolfWeatherError;
use crate::app::Language;
use crate::golf::Thresholds;
use crate::models::Coordinates;
use anyhow::{Context, Result};
use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GolfWeatherConfig {
    /// Golf-suitability thresholds and search radius
    #[serde(default)]
    pub thresholds: Thresholds,
    /// External provider endpoints and HTTP behaviour
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// External provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Base URL of the met.no Locationforecast API
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Base URL of the Overpass API
    #[serde(default = "default_courses_base_url")]
    pub courses_base_url: String,
    /// Base URL of the Nominatim search API
    #[serde(default = "default_places_base_url")]
    pub places_base_url: String,
    /// User agent sent to every provider (met.no rejects anonymous clients)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Automatic retries for transient failures; 0 leaves retrying to the user
    #[serde(default)]
    pub max_retries: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Display language
    #[serde(default)]
    pub language: Language,
    /// IANA timezone used to find each day's local noon
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Position reported as the device location, if any
    #[serde(default)]
    pub home: Option<Coordinates>,
}

// Default value functions
fn default_forecast_base_url() -> String {
    "https://api.met.no/weatherapi/locationforecast/2.0".to_string()
}

fn default_courses_base_url() -> String {
    "https://overpass-api.de/api".to_string()
}

fn default_places_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    format!("golfweather/{} (https://github.com/golfweather)", crate::VERSION)
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_timezone() -> String {
    "Europe/Oslo".to_string()
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            courses_base_url: default_courses_base_url(),
            places_base_url: default_places_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
            max_retries: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            timezone: default_timezone(),
            home: None,
        }
    }
}

impl GolfWeatherConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // GOLFWEATHER_THRESHOLDS__MIN_TEMPERATURE_C=12 and friends
        builder = builder.add_source(
            Environment::with_prefix("GOLFWEATHER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: GolfWeatherConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("golfweather").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.providers.forecast_base_url.is_empty() {
            self.providers.forecast_base_url = default_forecast_base_url();
        }
        if self.providers.courses_base_url.is_empty() {
            self.providers.courses_base_url = default_courses_base_url();
        }
        if self.providers.places_base_url.is_empty() {
            self.providers.places_base_url = default_places_base_url();
        }
        if self.providers.user_agent.is_empty() {
            self.providers.user_agent = default_user_agent();
        }
        if self.providers.timeout_seconds == 0 {
            self.providers.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.timezone.is_empty() {
            self.defaults.timezone = default_timezone();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_thresholds()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Resolve the configured timezone
    pub fn timezone(&self) -> Result<Tz> {
        self.defaults.timezone.parse::<Tz>().map_err(|_| {
            GolfWeatherError::config(format!(
                "Unknown timezone '{}'. Use an IANA name such as Europe/Oslo",
                self.defaults.timezone
            ))
            .into()
        })
    }

    fn validate_thresholds(&self) -> Result<()> {
        let thresholds = &self.thresholds;
        let values = [
            thresholds.min_temperature_c,
            thresholds.max_wind_speed_ms,
            thresholds.max_precipitation_mm,
            thresholds.search_radius_km,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(GolfWeatherError::config("Thresholds must be finite numbers").into());
        }

        if thresholds.max_wind_speed_ms < 0.0 || thresholds.max_precipitation_mm < 0.0 {
            return Err(GolfWeatherError::config(
                "Wind and precipitation thresholds cannot be negative",
            )
            .into());
        }

        if thresholds.search_radius_km <= 0.0 || thresholds.search_radius_km > 500.0 {
            return Err(GolfWeatherError::config(
                "Search radius must be greater than 0 and cannot exceed 500 km",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.providers.timeout_seconds > 300 {
            return Err(
                GolfWeatherError::config("Provider timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.providers.max_retries > 10 {
            return Err(GolfWeatherError::config("Provider max retries cannot exceed 10").into());
        }

        if let Some(home) = &self.defaults.home {
            if !home.is_valid() {
                return Err(GolfWeatherError::config(format!(
                    "Home position {} is out of range",
                    home.format_coordinates()
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GolfWeatherError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(GolfWeatherError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let urls = [
            ("forecast", &self.providers.forecast_base_url),
            ("courses", &self.providers.courses_base_url),
            ("places", &self.providers.places_base_url),
        ];
        for (name, url) in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(GolfWeatherError::config(format!(
                    "The {name} provider URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        self.timezone()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GolfWeatherConfig::default();
        assert_eq!(config.thresholds.min_temperature_c, 10.0);
        assert_eq!(config.thresholds.max_wind_speed_ms, 10.0);
        assert_eq!(config.thresholds.max_precipitation_mm, 2.0);
        assert_eq!(config.thresholds.search_radius_km, 40.0);
        assert_eq!(config.providers.max_retries, 0);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.language, Language::No);
        assert!(config.defaults.home.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_timezone_resolves() {
        let config = GolfWeatherConfig::default();
        assert_eq!(config.timezone().unwrap(), chrono_tz::Europe::Oslo);
    }

    #[test]
    fn test_invalid_timezone() {
        let mut config = GolfWeatherConfig::default();
        config.defaults.timezone = "Mars/Olympus".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown timezone"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = GolfWeatherConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_radius() {
        let mut config = GolfWeatherConfig::default();
        config.thresholds.search_radius_km = 0.0;
        assert!(config.validate().is_err());

        config.thresholds.search_radius_km = 501.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_non_finite_threshold() {
        let mut config = GolfWeatherConfig::default();
        config.thresholds.min_temperature_c = f64::NAN;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("finite"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = GolfWeatherConfig::default();
        config.providers.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = GolfWeatherConfig::default();
        config.providers.courses_base_url = "overpass-api.de".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("courses provider URL"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = GolfWeatherConfig::default();
        config.providers.forecast_base_url.clear();
        config.providers.timeout_seconds = 0;
        config.defaults.timezone.clear();
        config.apply_defaults();
        assert_eq!(
            config.providers.forecast_base_url,
            "https://api.met.no/weatherapi/locationforecast/2.0"
        );
        assert_eq!(config.providers.timeout_seconds, 30);
        assert_eq!(config.defaults.timezone, "Europe/Oslo");
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "golfweather-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
[thresholds]
min_temperature_c = 12.5

[defaults]
language = "en"
home = { latitude = 59.91, longitude = 10.75 }
"#,
        )
        .unwrap();

        let config = GolfWeatherConfig::load_from_path(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.thresholds.min_temperature_c, 12.5);
        assert_eq!(config.thresholds.max_wind_speed_ms, 10.0);
        assert_eq!(config.defaults.language, Language::En);
        assert_eq!(config.defaults.home, Some(Coordinates::new(59.91, 10.75)));
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = GolfWeatherConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("golfweather"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
