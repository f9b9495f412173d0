//! Golf domain logic
//!
//! The forecast aggregator, the suitability rule and the symbol lexicon are
//! pure and infallible. Course lookups go through [`CourseProvider`].

pub mod courses;
pub mod forecast;
pub mod overpass;
pub mod suitability;
pub mod symbols;

pub use courses::{Course, CourseCandidate, CourseProvider, CourseRanker, distance_km};
pub use forecast::{DailyForecast, ForecastAggregator, MAX_FORECAST_DAYS};
pub use overpass::OverpassClient;
pub use suitability::Thresholds;
pub use symbols::ConditionIcon;
