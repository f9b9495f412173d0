//! Presentation layer
//!
//! State, reducer, localized views and the orchestrator that drives the
//! gateways. Only the shape of [`crate::golf::DailyForecast`] is consumed here.

pub mod i18n;
pub mod service;
pub mod state;
pub mod view;

pub use i18n::{Language, TextKey};
pub use service::{Gateways, GolfWeatherApp};
pub use state::{AppState, Effect, Event, FailureKind, Phase};
pub use view::{CourseListView, ForecastCard, StatusView};
