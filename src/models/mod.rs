//! Data models shared by the gateways and the forecast pipeline
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and resolved places
//! - Weather: Raw forecast timesteps as delivered by the weather provider

pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinates, Place};
pub use weather::{InstantDetails, PeriodForecast, RawForecastEntry};
