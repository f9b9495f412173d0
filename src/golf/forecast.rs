//! Daily golf forecast aggregation
//!
//! Turns a raw weather timeseries for one location into at most seven
//! per-day verdicts. Each day is summarised from a single canonical sample:
//! the timestep whose local hour is closest to noon.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::golf::{ConditionIcon, Thresholds};
use crate::models::RawForecastEntry;

/// Maximum number of days in a forecast
pub const MAX_FORECAST_DAYS: usize = 7;

/// Local hour the canonical sample should be closest to
pub const TARGET_HOUR: u32 = 12;

/// Summary of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temperature_c: Option<f64>,
    pub wind_speed_ms: Option<f64>,
    /// Zero when the provider reported no precipitation window
    pub precipitation_mm: f64,
    pub is_golf_weather: bool,
    pub condition_icon: ConditionIcon,
}

/// Entries sharing one calendar date, in arrival order
#[derive(Debug)]
struct DayBucket<'a> {
    date: NaiveDate,
    entries: Vec<&'a RawForecastEntry>,
}

/// Builds daily forecasts from raw timesteps. Holds no state between runs.
#[derive(Debug, Clone, Copy)]
pub struct ForecastAggregator {
    thresholds: Thresholds,
    timezone: Tz,
}

impl ForecastAggregator {
    #[must_use]
    pub fn new(thresholds: Thresholds, timezone: Tz) -> Self {
        Self {
            thresholds,
            timezone,
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Aggregate a timeseries into at most [`MAX_FORECAST_DAYS`] days.
    ///
    /// The first seven distinct dates encountered are kept and returned in
    /// ascending date order. An empty input gives an empty output.
    #[must_use]
    pub fn aggregate(&self, entries: &[RawForecastEntry]) -> Vec<DailyForecast> {
        let buckets = bucket_by_day(entries);
        let total_days = buckets.len();

        let mut days: Vec<DailyForecast> = buckets
            .into_iter()
            .take(MAX_FORECAST_DAYS)
            .filter_map(|bucket| {
                self.canonical_sample(&bucket.entries)
                    .map(|sample| self.summarize(bucket.date, sample))
            })
            .collect();
        days.sort_by_key(|day| day.date);

        debug!(
            "Aggregated {} entries over {} dates into {} days ({} golf days)",
            entries.len(),
            total_days,
            days.len(),
            days.iter().filter(|day| day.is_golf_weather).count()
        );

        days
    }

    /// Pick the entry whose local hour is closest to noon.
    ///
    /// Ties keep the earliest entry seen.
    #[must_use]
    pub fn canonical_sample<'a>(
        &self,
        entries: &[&'a RawForecastEntry],
    ) -> Option<&'a RawForecastEntry> {
        let (first, rest) = entries.split_first()?;
        let mut best = *first;
        let mut best_distance = self.distance_from_noon(&best.timestamp);

        for &entry in rest {
            let distance = self.distance_from_noon(&entry.timestamp);
            if distance < best_distance {
                best = entry;
                best_distance = distance;
            }
        }

        Some(best)
    }

    fn distance_from_noon(&self, timestamp: &DateTime<Utc>) -> u32 {
        timestamp
            .with_timezone(&self.timezone)
            .hour()
            .abs_diff(TARGET_HOUR)
    }

    fn summarize(&self, date: NaiveDate, sample: &RawForecastEntry) -> DailyForecast {
        let temperature_c = sample.instant.air_temperature;
        let wind_speed_ms = sample.instant.wind_speed;
        let precipitation_mm = sample.precipitation_mm().unwrap_or(0.0);

        DailyForecast {
            date,
            temperature_c,
            wind_speed_ms,
            precipitation_mm,
            is_golf_weather: self.thresholds.is_golf_weather(
                temperature_c,
                wind_speed_ms,
                precipitation_mm,
            ),
            condition_icon: ConditionIcon::from_symbol(sample.symbol_code()),
        }
    }
}

/// Group entries by the UTC date of their timestamp, keeping first-seen order
fn bucket_by_day(entries: &[RawForecastEntry]) -> Vec<DayBucket<'_>> {
    let mut buckets: Vec<DayBucket<'_>> = Vec::new();
    let mut index_by_date: HashMap<NaiveDate, usize> = HashMap::new();

    for entry in entries {
        let date = entry.timestamp.date_naive();
        let index = *index_by_date.entry(date).or_insert_with(|| {
            buckets.push(DayBucket {
                date,
                entries: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[index].entries.push(entry);
    }

    buckets
}
