//! Weather gateway
//!
//! The forecast pipeline only sees [`RawForecastEntry`] sequences; which
//! provider produced them is decided here.

use std::future::Future;

use tracing::{info, instrument};

use crate::Result;
use crate::golf::{DailyForecast, ForecastAggregator};
use crate::models::{Coordinates, RawForecastEntry};

pub mod met_no;

pub use met_no::MetNoClient;

/// Source of raw forecast timeseries
pub trait ForecastProvider {
    /// Ordered timesteps for a position; may be empty
    fn forecast(
        &self,
        position: Coordinates,
    ) -> impl Future<Output = Result<Vec<RawForecastEntry>>> + Send;
}

/// Fetch the timeseries for a position and aggregate it into daily verdicts
#[instrument(skip(provider, aggregator), fields(position = %position.format_coordinates()))]
pub async fn fetch_daily_forecast<P: ForecastProvider>(
    provider: &P,
    aggregator: &ForecastAggregator,
    position: Coordinates,
) -> Result<Vec<DailyForecast>> {
    let entries = provider.forecast(position).await?;
    let days = aggregator.aggregate(&entries);
    info!(
        "Built {}-day forecast from {} timesteps",
        days.len(),
        entries.len()
    );
    Ok(days)
}
