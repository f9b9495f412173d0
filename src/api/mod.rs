//! JSON API over the course and forecast gateways

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::app::Language;
use crate::config::GolfWeatherConfig;
use crate::geocoding::{NominatimClient, PlaceSearch};
use crate::golf::{Course, CourseProvider, CourseRanker, DailyForecast, ForecastAggregator, OverpassClient};
use crate::models::Coordinates;
use crate::weather::{self, MetNoClient};
use crate::{GolfWeatherError, VERSION};

type ApiError = (StatusCode, String);

#[derive(Clone)]
pub struct ApiState {
    places: NominatimClient,
    courses: OverpassClient,
    weather: MetNoClient,
    aggregator: ForecastAggregator,
    language: Language,
}

impl ApiState {
    pub fn from_config(config: &GolfWeatherConfig) -> anyhow::Result<Self> {
        Ok(Self {
            places: NominatimClient::new(&config.providers)?,
            courses: OverpassClient::new(&config.providers)?,
            weather: MetNoClient::new(&config.providers)?,
            aggregator: ForecastAggregator::new(config.thresholds, config.timezone()?),
            language: config.defaults.language,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CoursesQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub q: Option<String>,
    pub lang: Option<Language>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesResponse {
    pub origin: Coordinates,
    pub radius_km: f64,
    pub courses: Vec<Course>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(get_courses))
        .route("/forecast", get(get_forecast))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}

async fn get_courses(
    State(state): State<ApiState>,
    Query(query): Query<CoursesQuery>,
) -> Result<Json<CoursesResponse>, ApiError> {
    let origin = match (query.lat, query.lon, query.q.as_deref().map(str::trim)) {
        (Some(lat), Some(lon), _) => coordinates(lat, lon)?,
        (None, None, Some(q)) if !q.is_empty() => {
            let language = query.lang.unwrap_or(state.language);
            let place = state
                .places
                .search(q, language)
                .await
                .map_err(gateway_error)?
                .ok_or_else(|| (StatusCode::NOT_FOUND, format!("No place found for '{q}'")))?;
            place.coordinates
        }
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                "Provide either lat and lon, or q".to_string(),
            ));
        }
    };

    let radius_km = state.aggregator.thresholds().search_radius_km;
    let candidates = state
        .courses
        .find_courses(origin, radius_km)
        .await
        .map_err(gateway_error)?;
    let courses = CourseRanker::rank(&origin, candidates);
    info!(
        "Found {} courses around {}",
        courses.len(),
        origin.format_coordinates()
    );

    Ok(Json(CoursesResponse {
        origin,
        radius_km,
        courses,
    }))
}

async fn get_forecast(
    State(state): State<ApiState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Vec<DailyForecast>>, ApiError> {
    let (Some(lat), Some(lon)) = (query.lat, query.lon) else {
        return Err((StatusCode::BAD_REQUEST, "lat and lon are required".to_string()));
    };
    let position = coordinates(lat, lon)?;

    let days = weather::fetch_daily_forecast(&state.weather, &state.aggregator, position)
        .await
        .map_err(gateway_error)?;
    Ok(Json(days))
}

fn coordinates(lat: f64, lon: f64) -> Result<Coordinates, ApiError> {
    let position = Coordinates::new(lat, lon);
    if position.is_valid() {
        Ok(position)
    } else {
        Err((
            StatusCode::BAD_REQUEST,
            format!("Coordinates out of range: {}", position.format_coordinates()),
        ))
    }
}

fn gateway_error(error: GolfWeatherError) -> ApiError {
    warn!("Upstream request failed: {}", error);
    (StatusCode::BAD_GATEWAY, error.user_message())
}
