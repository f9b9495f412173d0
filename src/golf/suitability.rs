//! Golf-suitability thresholds and the classification rule

use serde::{Deserialize, Serialize};

/// Process-wide thresholds, fixed once configuration is loaded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Lowest acceptable air temperature in Celsius (inclusive)
    pub min_temperature_c: f64,
    /// Highest acceptable wind speed in m/s (inclusive)
    pub max_wind_speed_ms: f64,
    /// Highest acceptable precipitation in mm (inclusive)
    pub max_precipitation_mm: f64,
    /// Radius around the user searched for courses
    pub search_radius_km: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_temperature_c: 10.0,
            max_wind_speed_ms: 10.0,
            max_precipitation_mm: 2.0,
            search_radius_km: 40.0,
        }
    }
}

impl Thresholds {
    /// Classify a day from its full-precision values.
    ///
    /// Unknown temperature or wind is never golf weather. Precipitation has
    /// already been defaulted to zero when unreported.
    #[must_use]
    pub fn is_golf_weather(
        &self,
        temperature_c: Option<f64>,
        wind_speed_ms: Option<f64>,
        precipitation_mm: f64,
    ) -> bool {
        match (temperature_c, wind_speed_ms) {
            (Some(temperature), Some(wind)) => {
                temperature >= self.min_temperature_c
                    && wind <= self.max_wind_speed_ms
                    && precipitation_mm <= self.max_precipitation_mm
            }
            _ => false,
        }
    }
}
