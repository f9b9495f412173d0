//! Overpass API client for golf course lookups

use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::courses::{CourseCandidate, CourseProvider};
use crate::Result;
use crate::config::ProvidersConfig;
use crate::http;
use crate::models::Coordinates;

const PROVIDER: &str = "Overpass";
const GOLF_COURSE_FILTER: &str = r#"["leisure"="golf_course"]"#;

#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl OverpassClient {
    pub fn new(config: &ProvidersConfig) -> Result<Self> {
        Ok(Self::with_client(
            http::build_client(config)?,
            &config.courses_base_url,
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

/// Overpass QL query for golf courses (nodes, ways and relations) around a point
#[must_use]
pub fn build_query(center: Coordinates, radius_km: f64) -> String {
    let around = format!(
        "(around:{},{},{})",
        radius_km * 1000.0,
        center.latitude,
        center.longitude
    );
    let statements: String = ["node", "way", "relation"]
        .iter()
        .map(|kind| format!("{kind}{GOLF_COURSE_FILTER}{around};"))
        .collect();
    format!("[out:json];({statements});out center tags;")
}

impl CourseProvider for OverpassClient {
    #[instrument(skip(self), fields(lat = center.latitude, lon = center.longitude))]
    async fn find_courses(&self, center: Coordinates, radius_km: f64) -> Result<Vec<CourseCandidate>> {
        let query = build_query(center, radius_km);
        let url = format!(
            "{}/interpreter?data={}",
            self.base_url,
            urlencoding::encode(&query)
        );

        let response: OverpassResponse = http::get_json(&self.client, &url, PROVIDER).await?;
        let total = response.elements.len();
        let candidates: Vec<CourseCandidate> = response
            .elements
            .into_iter()
            .filter_map(OverpassElement::into_candidate)
            .collect();

        debug!(
            "{} of {} elements had coordinates",
            candidates.len(),
            total
        );
        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: u64,
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<OverpassCenter>,
    tags: Option<OverpassTags>,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OverpassTags {
    name: Option<String>,
}

impl OverpassElement {
    /// Ways and relations only carry a `center`; elements without any position are skipped
    fn into_candidate(self) -> Option<CourseCandidate> {
        let (center_lat, center_lon) = self
            .center
            .map_or((None, None), |center| (center.lat, center.lon));
        let latitude = self.lat.or(center_lat)?;
        let longitude = self.lon.or(center_lon)?;

        Some(CourseCandidate {
            id: self.id,
            name: self
                .tags
                .and_then(|tags| tags.name)
                .filter(|name| !name.trim().is_empty()),
            coordinates: Coordinates::new(latitude, longitude),
        })
    }
}
