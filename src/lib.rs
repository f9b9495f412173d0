//! `golfweather` - find nearby golf courses and check the coming week for golf weather
//!
//! The core is the forecast aggregator in [`golf::forecast`]: a pure transform
//! from a raw weather timeseries to at most seven daily golf verdicts. Around it
//! sit the provider gateways (met.no, Overpass, Nominatim), a reducer-driven
//! presentation layer, a CLI and a small JSON API.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod geolocation;
pub mod golf;
pub mod http;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use app::{AppState, Event, GolfWeatherApp, Language};
pub use config::GolfWeatherConfig;
pub use error::GolfWeatherError;
pub use geocoding::{NominatimClient, PlaceSearch};
pub use geolocation::{FixedGeolocator, Geolocator};
pub use golf::{
    ConditionIcon, Course, CourseProvider, CourseRanker, DailyForecast, ForecastAggregator,
    OverpassClient, Thresholds,
};
pub use location_resolver::{LocationInput, LocationParser, LocationResolver};
pub use models::{Coordinates, Place, RawForecastEntry};
pub use weather::{ForecastProvider, MetNoClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GolfWeatherError>;
