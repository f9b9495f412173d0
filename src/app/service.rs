//! Orchestrator: runs reducer effects against the gateways
//!
//! One logical flow of control. Each effect is awaited before the next event
//! is applied, so state is never mutated concurrently.

use tracing::{info, instrument, warn};

use super::i18n::Language;
use super::state::{AppState, Effect, Event, FailureKind};
use super::view::{self, CourseListView, ForecastCard, StatusView};
use crate::geocoding::PlaceSearch;
use crate::geolocation::Geolocator;
use crate::golf::{Course, CourseProvider, CourseRanker, ForecastAggregator};
use crate::location_resolver::{LocationParser, LocationResolver};
use crate::weather::{self, ForecastProvider};

/// External services the app talks to
#[derive(Debug, Clone)]
pub struct Gateways<G, P, C, W> {
    pub geolocator: G,
    pub places: P,
    pub courses: C,
    pub weather: W,
}

pub struct GolfWeatherApp<G, P, C, W> {
    state: AppState,
    gateways: Gateways<G, P, C, W>,
    aggregator: ForecastAggregator,
}

impl<G, P, C, W> GolfWeatherApp<G, P, C, W>
where
    G: Geolocator,
    P: PlaceSearch,
    C: CourseProvider,
    W: ForecastProvider,
{
    pub fn new(
        gateways: Gateways<G, P, C, W>,
        aggregator: ForecastAggregator,
        language: Language,
    ) -> Self {
        Self {
            state: AppState::new(language),
            gateways,
            aggregator,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a single event without running its effect
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        self.state.apply(event)
    }

    /// Apply an event and run effects until the state settles
    pub async fn dispatch(&mut self, event: Event) {
        let mut next = self.state.apply(event);
        while let Some(effect) = next {
            let outcome = self.perform(effect).await;
            next = self.state.apply(outcome);
        }
    }

    /// Run one effect and report its outcome as an event
    #[instrument(skip(self))]
    pub async fn perform(&self, effect: Effect) -> Event {
        match effect {
            Effect::Locate => match self.gateways.geolocator.current_position().await {
                Ok(position) => Event::LocationResolved(position),
                Err(e) => {
                    warn!("Geolocation failed: {}", e);
                    Event::LocationFailed(FailureKind::from(&e))
                }
            },
            Effect::SearchPlace { query, language } => {
                let resolved = match LocationParser::parse(&query) {
                    Ok(input) => LocationResolver::resolve(&self.gateways.places, input, language).await,
                    Err(e) => Err(e),
                };
                match resolved {
                    Ok(Some(place)) => {
                        info!("Resolved '{}' to {}", query, place.name);
                        Event::LocationResolved(place.coordinates)
                    }
                    Ok(None) => Event::PlaceNotFound,
                    Err(e) => {
                        warn!("Place search failed: {}", e);
                        Event::LocationFailed(FailureKind::from(&e))
                    }
                }
            }
            Effect::FindCourses(position) => {
                let radius_km = self.aggregator.thresholds().search_radius_km;
                match self
                    .gateways
                    .courses
                    .find_courses(position, radius_km)
                    .await
                {
                    Ok(candidates) => {
                        let courses = CourseRanker::rank(&position, candidates);
                        info!("Found {} courses within {} km", courses.len(), radius_km);
                        Event::CoursesLoaded(courses)
                    }
                    Err(e) => {
                        warn!("Course lookup failed: {}", e);
                        Event::CoursesFailed
                    }
                }
            }
            Effect::FetchForecast { generation, course } => {
                match weather::fetch_daily_forecast(
                    &self.gateways.weather,
                    &self.aggregator,
                    course.coordinates,
                )
                .await
                {
                    Ok(days) => Event::ForecastLoaded { generation, days },
                    Err(e) => {
                        warn!("Forecast fetch failed for course {}: {}", course.id, e);
                        Event::ForecastFailed { generation }
                    }
                }
            }
        }
    }

    pub async fn locate(&mut self) {
        self.dispatch(Event::LocationRequested).await;
    }

    pub async fn search(&mut self, query: &str) {
        self.dispatch(Event::SearchSubmitted(query.to_string())).await;
    }

    pub async fn select_course(&mut self, course: Course) {
        self.dispatch(Event::CourseSelected(course)).await;
    }

    pub fn toggle_language(&mut self) {
        self.state.apply(Event::LanguageToggled);
    }

    #[must_use]
    pub fn status(&self) -> StatusView {
        view::status_view(&self.state)
    }

    #[must_use]
    pub fn course_list(&self) -> CourseListView {
        view::course_list_view(&self.state, self.aggregator.thresholds().search_radius_km)
    }

    #[must_use]
    pub fn forecast_cards(&self) -> Vec<ForecastCard> {
        view::forecast_cards(&self.state.forecast, self.state.language)
    }
}
