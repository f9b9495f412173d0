//! Raw forecast timesteps as delivered by the weather provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instantaneous values valid at the timestep itself
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct InstantDetails {
    /// Air temperature in Celsius
    pub air_temperature: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed: Option<f64>,
}

/// Summary of a lookahead window (next 1, 6 or 12 hours)
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct PeriodForecast {
    /// Provider symbol code, e.g. `rainshowers_day`
    pub symbol_code: Option<String>,
    /// Precipitation amount over the window in mm
    pub precipitation_amount: Option<f64>,
}

impl PeriodForecast {
    #[must_use]
    pub fn new(symbol_code: Option<&str>, precipitation_amount: Option<f64>) -> Self {
        Self {
            symbol_code: symbol_code.map(str::to_string),
            precipitation_amount,
        }
    }
}

/// One forecast timestep. Immutable once produced by the weather gateway.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub instant: InstantDetails,
    pub next_1_hours: Option<PeriodForecast>,
    pub next_6_hours: Option<PeriodForecast>,
    pub next_12_hours: Option<PeriodForecast>,
}

impl RawForecastEntry {
    /// Timestep with no data attached
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            instant: InstantDetails::default(),
            next_1_hours: None,
            next_6_hours: None,
            next_12_hours: None,
        }
    }

    #[must_use]
    pub fn with_instant(mut self, air_temperature: Option<f64>, wind_speed: Option<f64>) -> Self {
        self.instant = InstantDetails {
            air_temperature,
            wind_speed,
        };
        self
    }

    #[must_use]
    pub fn with_next_1_hours(mut self, period: PeriodForecast) -> Self {
        self.next_1_hours = Some(period);
        self
    }

    #[must_use]
    pub fn with_next_6_hours(mut self, period: PeriodForecast) -> Self {
        self.next_6_hours = Some(period);
        self
    }

    #[must_use]
    pub fn with_next_12_hours(mut self, period: PeriodForecast) -> Self {
        self.next_12_hours = Some(period);
        self
    }

    /// Lookahead windows, shortest first
    fn periods(&self) -> impl Iterator<Item = &PeriodForecast> {
        [&self.next_1_hours, &self.next_6_hours, &self.next_12_hours]
            .into_iter()
            .flatten()
    }

    /// Precipitation from the most granular window that reports one
    #[must_use]
    pub fn precipitation_mm(&self) -> Option<f64> {
        self.periods().find_map(|period| period.precipitation_amount)
    }

    /// Symbol code from the most granular window that reports one
    #[must_use]
    pub fn symbol_code(&self) -> Option<&str> {
        self.periods()
            .find_map(|period| period.symbol_code.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_precipitation_prefers_shortest_window() {
        let entry = RawForecastEntry::new(noon())
            .with_next_1_hours(PeriodForecast::new(None, Some(0.4)))
            .with_next_6_hours(PeriodForecast::new(None, Some(3.1)));
        assert_eq!(entry.precipitation_mm(), Some(0.4));
    }

    #[test]
    fn test_precipitation_falls_back_to_longer_window() {
        let entry = RawForecastEntry::new(noon())
            .with_next_1_hours(PeriodForecast::new(Some("cloudy"), None))
            .with_next_6_hours(PeriodForecast::new(None, Some(3.1)));
        assert_eq!(entry.precipitation_mm(), Some(3.1));
    }

    #[test]
    fn test_missing_windows_report_nothing() {
        let entry = RawForecastEntry::new(noon());
        assert_eq!(entry.precipitation_mm(), None);
        assert_eq!(entry.symbol_code(), None);
    }

    #[test]
    fn test_symbol_code_falls_back_to_twelve_hours() {
        let entry = RawForecastEntry::new(noon())
            .with_next_12_hours(PeriodForecast::new(Some("fair_day"), None));
        assert_eq!(entry.symbol_code(), Some("fair_day"));
    }
}
