//! Integration tests for golfweather

use std::collections::BTreeSet;
use std::process::Command;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use golfweather::api::ApiState;
use golfweather::app::{Gateways, Phase};
use golfweather::models::PeriodForecast;
use golfweather::{
    ConditionIcon, Coordinates, FixedGeolocator, ForecastAggregator, GolfWeatherApp,
    GolfWeatherConfig, Language, MetNoClient, NominatimClient, OverpassClient, RawForecastEntry,
    Thresholds, web,
};

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
}

fn utc_aggregator() -> ForecastAggregator {
    ForecastAggregator::new(Thresholds::default(), chrono_tz::UTC)
}

/// Hourly day where only the noon sample carries the given values
fn hourly_day(day: u32, noon_temperature: f64, noon_wind: f64) -> Vec<RawForecastEntry> {
    (0..24)
        .map(|hour| {
            let entry = RawForecastEntry::new(at(day, hour));
            if hour == 12 {
                entry
                    .with_instant(Some(noon_temperature), Some(noon_wind))
                    .with_next_1_hours(PeriodForecast::new(Some("clearsky_day"), Some(0.0)))
            } else {
                entry
                    .with_instant(Some(-5.0), Some(25.0))
                    .with_next_1_hours(PeriodForecast::new(Some("heavyrain"), Some(8.0)))
            }
        })
        .collect()
}

#[test]
fn test_three_day_scenario() {
    let mut entries = hourly_day(1, 12.0, 4.0);
    entries.extend(hourly_day(2, 8.0, 4.0));
    entries.push(
        RawForecastEntry::new(at(3, 23))
            .with_instant(Some(15.0), Some(3.0))
            .with_next_1_hours(PeriodForecast::new(Some("rain"), Some(1.0))),
    );

    let days = utc_aggregator().aggregate(&entries);

    assert_eq!(days.len(), 3);
    let verdicts: Vec<bool> = days.iter().map(|day| day.is_golf_weather).collect();
    assert_eq!(verdicts, vec![true, false, true]);

    assert_eq!(days[0].temperature_c, Some(12.0));
    assert_eq!(days[0].condition_icon, ConditionIcon::Sun);
    assert_eq!(days[1].temperature_c, Some(8.0));
    assert_eq!(days[2].temperature_c, Some(15.0));
    assert_eq!(days[2].precipitation_mm, 1.0);
    assert_eq!(days[2].condition_icon, ConditionIcon::Rain);
}

#[rstest]
#[case(0, 1)]
#[case(30, 1)]
#[case(3, 6)]
#[case(12, 48)]
#[case(17, 24)]
fn test_output_is_bounded_and_ordered(#[case] offset_hours: i64, #[case] step_hours: i64) {
    let start = at(1, 0) + Duration::hours(offset_hours);
    let entries: Vec<RawForecastEntry> = (0..60)
        .map(|i| {
            RawForecastEntry::new(start + Duration::hours(i * step_hours))
                .with_instant(Some(11.0), Some(2.0))
        })
        .collect();
    let distinct_dates: BTreeSet<NaiveDate> =
        entries.iter().map(|e| e.timestamp.date_naive()).collect();

    let days = utc_aggregator().aggregate(&entries);

    assert!(days.len() <= 7);
    assert!(days.len() <= distinct_dates.len());
    assert!(days.windows(2).all(|pair| pair[0].date < pair[1].date));
}

#[rstest]
#[case(9.9, 5.0, 0.0, false)]
#[case(10.0, 10.0, 2.0, true)]
#[case(10.0, 10.1, 0.0, false)]
#[case(25.0, 0.0, 2.01, false)]
fn test_golf_weather_boundaries(
    #[case] temperature: f64,
    #[case] wind: f64,
    #[case] precipitation: f64,
    #[case] expected: bool,
) {
    let entry = RawForecastEntry::new(at(1, 12))
        .with_instant(Some(temperature), Some(wind))
        .with_next_6_hours(PeriodForecast::new(None, Some(precipitation)));
    let days = utc_aggregator().aggregate(&[entry]);
    assert_eq!(days[0].is_golf_weather, expected);
}

async fn mock_providers() -> (MockServer, GolfWeatherConfig) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather/compact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {
                "timeseries": [
                    {
                        "time": "2024-06-01T10:00:00Z",
                        "data": {
                            "instant": { "details": { "air_temperature": 16.4, "wind_speed": 3.2 } },
                            "next_1_hours": {
                                "summary": { "symbol_code": "fair_day" },
                                "details": { "precipitation_amount": 0.0 }
                            }
                        }
                    },
                    {
                        "time": "2024-06-02T10:00:00Z",
                        "data": {
                            "instant": { "details": { "air_temperature": 9.0, "wind_speed": 12.5 } },
                            "next_6_hours": {
                                "summary": { "symbol_code": "rainshowers_day" },
                                "details": { "precipitation_amount": 4.2 }
                            }
                        }
                    }
                ]
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/overpass/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                { "type": "way", "id": 11, "center": { "lat": 60.1, "lon": 10.7 }, "tags": { "name": "Far GK" } },
                { "type": "node", "id": 12, "lat": 59.95, "lon": 10.7 },
                { "type": "relation", "id": 13 }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/nominatim/search"))
        .and(query_param("q", "Oslo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": "59.9133", "lon": "10.7389", "display_name": "Oslo, Norge" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/nominatim/search"))
        .and(query_param("q", "Atlantis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut config = GolfWeatherConfig::default();
    config.providers.forecast_base_url = format!("{}/weather", server.uri());
    config.providers.courses_base_url = format!("{}/overpass", server.uri());
    config.providers.places_base_url = format!("{}/nominatim", server.uri());
    (server, config)
}

async fn get_json(config: &GolfWeatherConfig, uri: &str) -> (StatusCode, Value) {
    let app = web::app(ApiState::from_config(config).unwrap());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    });
    (status, body)
}

#[tokio::test]
async fn test_api_health() {
    let (status, body) = get_json(&GolfWeatherConfig::default(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_api_forecast() {
    let (_server, config) = mock_providers().await;
    let (status, body) = get_json(&config, "/api/forecast?lat=59.9&lon=10.7").await;

    assert_eq!(status, StatusCode::OK);
    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-06-01");
    assert_eq!(days[0]["isGolfWeather"], true);
    assert_eq!(days[0]["conditionIcon"], "SUN");
    assert_eq!(days[1]["isGolfWeather"], false);
    assert_eq!(days[1]["precipitationMm"], 4.2);
    assert_eq!(days[1]["conditionIcon"], "RAIN");
}

#[tokio::test]
async fn test_api_forecast_requires_coordinates() {
    let (status, _) = get_json(&GolfWeatherConfig::default(), "/api/forecast?lat=59.9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&GolfWeatherConfig::default(), "/api/forecast?lat=99&lon=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_courses_ranked() {
    let (_server, config) = mock_providers().await;
    let (status, body) = get_json(&config, "/api/courses?lat=59.9&lon=10.7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["radiusKm"], 40.0);
    let courses = body["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["id"], 12);
    assert_eq!(courses[1]["name"], "Far GK");
}

#[tokio::test]
async fn test_api_courses_by_place() {
    let (_server, config) = mock_providers().await;

    let (status, body) = get_json(&config, "/api/courses?q=Oslo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["origin"]["latitude"], 59.9133);

    let (status, _) = get_json(&config, "/api/courses?q=Atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(&config, "/api/courses").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut config = GolfWeatherConfig::default();
    config.providers.forecast_base_url = server.uri();
    let (status, body) = get_json(&config, "/api/forecast?lat=59.9&lon=10.7").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.as_str().unwrap_or_default().contains("500"));
}

#[tokio::test]
async fn test_full_flow_against_providers() {
    let (_server, config) = mock_providers().await;
    let mut app = GolfWeatherApp::new(
        Gateways {
            geolocator: FixedGeolocator::new(None),
            places: NominatimClient::new(&config.providers).unwrap(),
            courses: OverpassClient::new(&config.providers).unwrap(),
            weather: MetNoClient::new(&config.providers).unwrap(),
        },
        ForecastAggregator::new(config.thresholds, config.timezone().unwrap()),
        Language::En,
    );

    app.search("Oslo").await;

    assert_eq!(app.state().phase, Phase::Ready);
    assert_eq!(
        app.state().user_location,
        Some(Coordinates::new(59.9133, 10.7389))
    );
    assert_eq!(app.state().selected_course.as_ref().map(|c| c.id), Some(12));

    let status = app.status();
    assert_eq!(status.title, "Golf weather today");
    assert_eq!(status.message, "Golf course · 16C · 3.2 m/s · 0.0 mm");
    assert_eq!(status.icon, "SUN");

    let cards = app.forecast_cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].label, "Sat 1 Jun");
    assert_eq!(cards[1].verdict, "Not golf weather");

    app.toggle_language();
    assert_eq!(app.status().title, "Golfvær i dag");
    assert_eq!(app.course_list().meta, "Funnet 2 baner innen 40 km.");
}

#[tokio::test]
async fn test_full_flow_unknown_place() {
    let (_server, config) = mock_providers().await;
    let mut app = GolfWeatherApp::new(
        Gateways {
            geolocator: FixedGeolocator::new(None),
            places: NominatimClient::new(&config.providers).unwrap(),
            courses: OverpassClient::new(&config.providers).unwrap(),
            weather: MetNoClient::new(&config.providers).unwrap(),
        },
        ForecastAggregator::new(config.thresholds, config.timezone().unwrap()),
        Language::En,
    );

    app.search("Atlantis").await;
    assert_eq!(app.state().phase, Phase::PlaceNotFound);

    app.locate().await;
    assert_eq!(app.state().phase, Phase::LocationDenied);
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_golfweather"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("golfweather"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("serve"));
}
