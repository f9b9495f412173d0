//! Location Resolution Module
//!
//! Turns what the user typed into a position: `lat,lon` pairs are used as-is,
//! everything else goes through place search.

use tracing::debug;

use crate::app::Language;
use crate::geocoding::PlaceSearch;
use crate::models::{Coordinates, Place};
use crate::{GolfWeatherError, Result};

/// Parsed location input
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    Coordinates(Coordinates),
    Place(String),
}

pub struct LocationParser;

impl LocationParser {
    /// Parse free text. Fails only for empty input.
    pub fn parse(input: &str) -> Result<LocationInput> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GolfWeatherError::validation("Location must not be empty"));
        }

        if let Some(coordinates) = Self::parse_coordinates(input) {
            return Ok(LocationInput::Coordinates(coordinates));
        }

        Ok(LocationInput::Place(input.to_string()))
    }

    /// Parse "59.91,10.75" or "59.91 10.75"; out-of-range pairs are not coordinates
    fn parse_coordinates(input: &str) -> Option<Coordinates> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        let [lat, lon] = parts.as_slice() else {
            return None;
        };
        let coordinates = Coordinates::new(lat.parse().ok()?, lon.parse().ok()?);
        coordinates.is_valid().then_some(coordinates)
    }
}

/// Service for resolving location inputs
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve input to a place. `Ok(None)` means the search found nothing.
    pub async fn resolve<S: PlaceSearch>(
        search: &S,
        input: LocationInput,
        language: Language,
    ) -> Result<Option<Place>> {
        debug!("Resolving location input: {:?}", input);

        match input {
            LocationInput::Coordinates(coordinates) => Ok(Some(Place {
                name: coordinates.format_coordinates(),
                coordinates,
            })),
            LocationInput::Place(query) => search.search(&query, language).await,
        }
    }
}
