//! Text views derived from [`AppState`]
//!
//! Views are rebuilt from state on every render, so a language toggle only
//! needs to re-run them. Display rounding happens here and never feeds back
//! into classification.

use std::fmt;

use serde::Serialize;

use super::i18n::{Language, TextKey};
use super::state::{AppState, Phase};
use crate::golf::{Course, DailyForecast};

const ICON_IDLE: &str = "--";
const ICON_LOADING: &str = "...";
const ICON_FAILED: &str = "!";
const UNKNOWN: &str = "--";

/// Today's status card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub title: String,
    pub message: String,
    pub icon: String,
}

impl StatusView {
    fn new(title: impl Into<String>, message: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon: icon.into(),
        }
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}\n    {}", self.icon, self.title, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseLine {
    pub name: String,
    pub distance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseListView {
    pub meta: String,
    pub lines: Vec<CourseLine>,
    /// Shown instead of lines when nothing was found
    pub empty_message: Option<String>,
}

impl fmt::Display for CourseListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.meta)?;
        if let Some(message) = &self.empty_message {
            write!(f, "\n  {message}")?;
        }
        for line in &self.lines {
            write!(f, "\n  {:<40} {}", line.name, line.distance)?;
        }
        Ok(())
    }
}

/// One day in the forecast grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastCard {
    pub label: String,
    pub icon: String,
    pub summary: String,
    pub verdict: String,
}

impl fmt::Display for ForecastCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} {:<10} {:<28} {}",
            self.label, self.icon, self.summary, self.verdict
        )
    }
}

/// Round half up, like a browser's `Math.round`
#[must_use]
pub fn round_temperature(temperature: f64) -> i64 {
    (temperature + 0.5).floor() as i64
}

/// "{temp}C · {wind} m/s · {precip} mm", with `--` for unknown values
#[must_use]
pub fn format_summary(
    temperature_c: Option<f64>,
    wind_speed_ms: Option<f64>,
    precipitation_mm: f64,
) -> String {
    let temperature = temperature_c.map_or_else(
        || UNKNOWN.to_string(),
        |t| round_temperature(t).to_string(),
    );
    let wind = wind_speed_ms.map_or_else(|| UNKNOWN.to_string(), |w| format!("{w:.1}"));
    format!("{temperature}C · {wind} m/s · {precipitation_mm:.1} mm")
}

#[must_use]
pub fn day_summary(day: &DailyForecast) -> String {
    format_summary(day.temperature_c, day.wind_speed_ms, day.precipitation_mm)
}

fn course_name(course: &Course, language: Language) -> &str {
    course.display_name(language.text(TextKey::DefaultCourseName))
}

#[must_use]
pub fn status_view(state: &AppState) -> StatusView {
    let language = state.language;
    let text = |key| language.text(key);
    let idle_title = text(TextKey::StatusIdleTitle);
    let course_title = state
        .selected_course
        .as_ref()
        .map_or(idle_title, |course| course_name(course, language));

    match state.phase {
        Phase::Idle => StatusView::new(idle_title, text(TextKey::StatusIdleMessage), ICON_IDLE),
        Phase::Locating | Phase::LoadingCourses => {
            StatusView::new(idle_title, text(TextKey::StatusLoading), ICON_LOADING)
        }
        Phase::LoadingForecast => {
            StatusView::new(course_title, text(TextKey::StatusLoading), ICON_LOADING)
        }
        Phase::Ready => match (state.today(), &state.selected_course) {
            (Some(today), Some(course)) => {
                let title = if today.is_golf_weather {
                    text(TextKey::StatusGolf)
                } else {
                    text(TextKey::StatusNoGolf)
                };
                StatusView::new(
                    title,
                    format!("{} · {}", course_name(course, language), day_summary(today)),
                    today.condition_icon.label(),
                )
            }
            _ => StatusView::new(idle_title, text(TextKey::StatusIdleMessage), ICON_IDLE),
        },
        Phase::LocationDenied => {
            StatusView::new(idle_title, text(TextKey::StatusLocationDenied), ICON_FAILED)
        }
        Phase::PlaceNotFound => {
            StatusView::new(idle_title, text(TextKey::CoursesEmpty), ICON_FAILED)
        }
        Phase::NoCourses => StatusView::new(idle_title, text(TextKey::CoursesEmpty), ICON_IDLE),
        Phase::NoForecast => {
            StatusView::new(course_title, text(TextKey::ForecastEmpty), ICON_IDLE)
        }
        Phase::Failed => StatusView::new(course_title, text(TextKey::StatusError), ICON_FAILED),
    }
}

#[must_use]
pub fn course_list_view(state: &AppState, radius_km: f64) -> CourseListView {
    let language = state.language;

    if state.user_location.is_none() {
        return CourseListView {
            meta: language.text(TextKey::StatusIdleMessage).to_string(),
            lines: Vec::new(),
            empty_message: None,
        };
    }

    if state.phase == Phase::LoadingCourses {
        return CourseListView {
            meta: language.text(TextKey::StatusLoading).to_string(),
            lines: Vec::new(),
            empty_message: None,
        };
    }

    let count = state.courses.len().to_string();
    let radius = radius_km.to_string();
    let meta = language.translate(
        TextKey::CoursesMeta,
        &[("count", count.as_str()), ("radius", radius.as_str())],
    );

    let lines: Vec<CourseLine> = state
        .courses
        .iter()
        .map(|course| {
            let value = format!("{:.1}", course.distance_km);
            CourseLine {
                name: course_name(course, language).to_string(),
                distance: language.translate(TextKey::DistanceKm, &[("value", value.as_str())]),
            }
        })
        .collect();

    CourseListView {
        meta,
        empty_message: lines
            .is_empty()
            .then(|| language.text(TextKey::CoursesEmpty).to_string()),
        lines,
    }
}

#[must_use]
pub fn forecast_card(day: &DailyForecast, language: Language) -> ForecastCard {
    ForecastCard {
        label: language.day_label(day.date),
        icon: day.condition_icon.label().to_string(),
        summary: day_summary(day),
        verdict: if day.is_golf_weather {
            language.text(TextKey::ForecastGood)
        } else {
            language.text(TextKey::ForecastBad)
        }
        .to_string(),
    }
}

#[must_use]
pub fn forecast_cards(days: &[DailyForecast], language: Language) -> Vec<ForecastCard> {
    days.iter().map(|day| forecast_card(day, language)).collect()
}
