//! Device position lookup

use std::future::Future;

use tracing::debug;

use crate::models::Coordinates;
use crate::{GolfWeatherError, Result};

/// Source of the user's current position
pub trait Geolocator {
    fn current_position(&self) -> impl Future<Output = Result<Coordinates>> + Send;
}

/// Geolocator answering with a preconfigured position.
///
/// Without a position it behaves like a denied permission prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeolocator {
    position: Option<Coordinates>,
}

impl FixedGeolocator {
    #[must_use]
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates> {
        match self.position {
            Some(position) if position.is_valid() => {
                debug!("Using fixed position {}", position.format_coordinates());
                Ok(position)
            }
            Some(position) => Err(GolfWeatherError::location_unavailable(format!(
                "position {} is out of range",
                position.format_coordinates()
            ))),
            None => Err(GolfWeatherError::location_unavailable(
                "no position configured",
            )),
        }
    }
}
