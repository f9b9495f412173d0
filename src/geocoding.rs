//! Free-text place search
//!
//! Used as the fallback when no device position is available. Results are
//! requested in the current display language.

use std::future::Future;

use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::app::Language;
use crate::config::ProvidersConfig;
use crate::http;
use crate::models::{Coordinates, Place};
use crate::{GolfWeatherError, Result};

const PROVIDER: &str = "Nominatim";

/// Resolves a place name to coordinates
pub trait PlaceSearch {
    /// Best match for `query`, or `None` when nothing matched
    fn search(
        &self,
        query: &str,
        language: Language,
    ) -> impl Future<Output = Result<Option<Place>>> + Send;
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl NominatimClient {
    pub fn new(config: &ProvidersConfig) -> Result<Self> {
        Ok(Self::with_client(
            http::build_client(config)?,
            &config.places_base_url,
        ))
    }

    #[must_use]
    pub fn with_client(client: ClientWithMiddleware, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl PlaceSearch for NominatimClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, language: Language) -> Result<Option<Place>> {
        let url = format!(
            "{}/search?format=json&q={}&limit=1&accept-language={}",
            self.base_url,
            urlencoding::encode(query),
            language.code()
        );

        let results: Vec<NominatimResult> = http::get_json(&self.client, &url, PROVIDER).await?;
        let Some(first) = results.into_iter().next() else {
            debug!("No place found for '{}'", query);
            return Ok(None);
        };

        let place = first.into_place()?;
        debug!(
            "Found place: {} ({})",
            place.name,
            place.coordinates.format_coordinates()
        );
        Ok(Some(place))
    }
}

#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

impl NominatimResult {
    fn into_place(self) -> Result<Place> {
        let parse = |value: &str, field: &str| {
            value.trim().parse::<f64>().map_err(|e| {
                GolfWeatherError::parse(format!("Invalid {field} '{value}' from {PROVIDER}: {e}"))
            })
        };
        let coordinates = Coordinates::new(parse(&self.lat, "latitude")?, parse(&self.lon, "longitude")?);

        Ok(Place {
            name: self.display_name,
            coordinates,
        })
    }
}
