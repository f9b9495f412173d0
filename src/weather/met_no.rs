//! met.no Locationforecast 2.0 client
//!
//! Fetches the `compact` product and converts its timeseries into
//! [`RawForecastEntry`] values. Missing blocks are carried through as `None`;
//! deciding what absence means is left to the aggregator.

use chrono::{DateTime, Utc};
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::ForecastProvider;
use crate::Result;
use crate::config::ProvidersConfig;
use crate::http;
use crate::models::{Coordinates, InstantDetails, PeriodForecast, RawForecastEntry};

const PROVIDER: &str = "met.no";

/// Weather provider backed by api.met.no
#[derive(Debug, Clone)]
pub struct MetNoClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl MetNoClient {
    /// Create a client from provider configuration
    pub fn new(config: &ProvidersConfig) -> Result<Self> {
        Ok(Self::with_client(
            http::build_client(config)?,
            &config.forecast_base_url,
        ))
    }

    #[must_use]
    pub fn with_client(client: ClientWithMiddleware, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn forecast_url(&self, position: Coordinates) -> String {
        // met.no asks for at most four decimals
        let position = position.rounded(4);
        format!(
            "{}/compact?lat={}&lon={}",
            self.base_url, position.latitude, position.longitude
        )
    }
}

impl ForecastProvider for MetNoClient {
    #[instrument(skip(self), fields(lat = position.latitude, lon = position.longitude))]
    async fn forecast(&self, position: Coordinates) -> Result<Vec<RawForecastEntry>> {
        let url = self.forecast_url(position);
        let response: LocationForecastResponse = http::get_json(&self.client, &url, PROVIDER).await?;

        let entries: Vec<RawForecastEntry> = response
            .properties
            .map(|properties| properties.timeseries)
            .unwrap_or_default()
            .into_iter()
            .map(RawForecastEntry::from)
            .collect();

        debug!("Received {} timesteps from {}", entries.len(), PROVIDER);
        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct LocationForecastResponse {
    properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    #[serde(default)]
    timeseries: Vec<TimeStep>,
}

#[derive(Debug, Deserialize)]
struct TimeStep {
    time: DateTime<Utc>,
    #[serde(default)]
    data: TimeStepData,
}

#[derive(Debug, Default, Deserialize)]
struct TimeStepData {
    instant: Option<InstantBlock>,
    next_1_hours: Option<PeriodBlock>,
    next_6_hours: Option<PeriodBlock>,
    next_12_hours: Option<PeriodBlock>,
}

#[derive(Debug, Deserialize)]
struct InstantBlock {
    details: Option<InstantBlockDetails>,
}

#[derive(Debug, Deserialize)]
struct InstantBlockDetails {
    air_temperature: Option<f64>,
    wind_speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PeriodBlock {
    summary: Option<PeriodSummary>,
    details: Option<PeriodDetails>,
}

#[derive(Debug, Deserialize)]
struct PeriodSummary {
    symbol_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PeriodDetails {
    precipitation_amount: Option<f64>,
}

impl From<PeriodBlock> for PeriodForecast {
    fn from(block: PeriodBlock) -> Self {
        Self {
            symbol_code: block.summary.and_then(|summary| summary.symbol_code),
            precipitation_amount: block.details.and_then(|details| details.precipitation_amount),
        }
    }
}

impl From<TimeStep> for RawForecastEntry {
    fn from(step: TimeStep) -> Self {
        let instant = step
            .data
            .instant
            .and_then(|instant| instant.details)
            .map(|details| InstantDetails {
                air_temperature: details.air_temperature,
                wind_speed: details.wind_speed,
            })
            .unwrap_or_default();

        Self {
            timestamp: step.time,
            instant,
            next_1_hours: step.data.next_1_hours.map(PeriodForecast::from),
            next_6_hours: step.data.next_6_hours.map(PeriodForecast::from),
            next_12_hours: step.data.next_12_hours.map(PeriodForecast::from),
        }
    }
}
