//! Application state and its reducer
//!
//! All mutation goes through [`AppState::apply`]. The reducer never performs
//! I/O; it answers with an [`Effect`] describing the next request to make, and
//! the result of that request comes back in as another [`Event`].

use tracing::debug;

use super::i18n::Language;
use crate::GolfWeatherError;
use crate::golf::{Course, DailyForecast};
use crate::models::Coordinates;

/// Where the user is in the locate → courses → forecast flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Locating,
    LoadingCourses,
    LoadingForecast,
    Ready,
    LocationDenied,
    PlaceNotFound,
    NoCourses,
    NoForecast,
    Failed,
}

/// How a gateway failure is reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    LocationDenied,
    Other,
}

impl From<&GolfWeatherError> for FailureKind {
    fn from(error: &GolfWeatherError) -> Self {
        match error {
            GolfWeatherError::LocationUnavailable { .. } => FailureKind::LocationDenied,
            _ => FailureKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LanguageToggled,
    LocationRequested,
    SearchSubmitted(String),
    LocationResolved(Coordinates),
    PlaceNotFound,
    LocationFailed(FailureKind),
    CoursesLoaded(Vec<Course>),
    CoursesFailed,
    CourseSelected(Course),
    ForecastLoaded {
        generation: u64,
        days: Vec<DailyForecast>,
    },
    ForecastFailed {
        generation: u64,
    },
}

/// Request the orchestrator should perform next
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Locate,
    SearchPlace { query: String, language: Language },
    FindCourses(Coordinates),
    FetchForecast { generation: u64, course: Course },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub language: Language,
    pub user_location: Option<Coordinates>,
    /// Nearest first
    pub courses: Vec<Course>,
    pub selected_course: Option<Course>,
    pub forecast: Vec<DailyForecast>,
    pub phase: Phase,
    /// Token of the latest forecast request; older responses are dropped
    pub generation: u64,
}

impl AppState {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// First forecast day, the one today's verdict is based on
    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.forecast.first()
    }

    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        debug!("Applying {} in phase {:?}", event_name(&event), self.phase);

        match event {
            Event::LanguageToggled => {
                self.language = self.language.toggled();
                None
            }
            Event::LocationRequested => {
                self.phase = Phase::Locating;
                Some(Effect::Locate)
            }
            Event::SearchSubmitted(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return None;
                }
                self.phase = Phase::Locating;
                Some(Effect::SearchPlace {
                    query: query.to_string(),
                    language: self.language,
                })
            }
            Event::LocationResolved(position) => {
                self.user_location = Some(position);
                self.courses.clear();
                self.selected_course = None;
                self.forecast.clear();
                // forecasts still in flight belong to the old location
                self.generation += 1;
                self.phase = Phase::LoadingCourses;
                Some(Effect::FindCourses(position))
            }
            Event::PlaceNotFound => {
                self.phase = Phase::PlaceNotFound;
                None
            }
            Event::LocationFailed(kind) => {
                self.phase = match kind {
                    FailureKind::LocationDenied => Phase::LocationDenied,
                    FailureKind::Other => Phase::Failed,
                };
                None
            }
            Event::CoursesLoaded(courses) => {
                self.courses = courses;
                match self.courses.first().cloned() {
                    Some(nearest) => Some(self.select(nearest)),
                    None => {
                        self.phase = Phase::NoCourses;
                        None
                    }
                }
            }
            Event::CoursesFailed => {
                self.phase = Phase::Failed;
                None
            }
            Event::CourseSelected(course) => Some(self.select(course)),
            Event::ForecastLoaded { generation, days } => {
                if self.is_stale(generation) {
                    return None;
                }
                self.phase = if days.is_empty() {
                    Phase::NoForecast
                } else {
                    Phase::Ready
                };
                self.forecast = days;
                None
            }
            Event::ForecastFailed { generation } => {
                if self.is_stale(generation) {
                    return None;
                }
                self.forecast.clear();
                self.phase = Phase::Failed;
                None
            }
        }
    }

    fn select(&mut self, course: Course) -> Effect {
        self.generation += 1;
        self.selected_course = Some(course.clone());
        self.forecast.clear();
        self.phase = Phase::LoadingForecast;
        Effect::FetchForecast {
            generation: self.generation,
            course,
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = generation != self.generation;
        if stale {
            debug!(
                "Discarding forecast response {} (latest is {})",
                generation, self.generation
            );
        }
        stale
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::LanguageToggled => "LanguageToggled",
        Event::LocationRequested => "LocationRequested",
        Event::SearchSubmitted(_) => "SearchSubmitted",
        Event::LocationResolved(_) => "LocationResolved",
        Event::PlaceNotFound => "PlaceNotFound",
        Event::LocationFailed(_) => "LocationFailed",
        Event::CoursesLoaded(_) => "CoursesLoaded",
        Event::CoursesFailed => "CoursesFailed",
        Event::CourseSelected(_) => "CourseSelected",
        Event::ForecastLoaded { .. } => "ForecastLoaded",
        Event::ForecastFailed { .. } => "ForecastFailed",
    }
}
