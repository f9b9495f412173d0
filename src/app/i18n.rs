//! Display languages and UI strings

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Norwegian bokmål
    #[default]
    No,
    En,
}

impl Language {
    /// Language code as sent to providers
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::No => "no",
            Language::En => "en",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::No => Language::En,
            Language::En => Language::No,
        }
    }

    /// Look up a UI string
    #[must_use]
    pub fn text(self, key: TextKey) -> &'static str {
        match self {
            Language::No => norwegian(key),
            Language::En => english(key),
        }
    }

    /// Look up a UI string and fill in `{name}` placeholders
    #[must_use]
    pub fn translate(self, key: TextKey, vars: &[(&str, &str)]) -> String {
        vars.iter()
            .fold(self.text(key).to_string(), |text, (name, value)| {
                text.replacen(&format!("{{{name}}}"), value, 1)
            })
    }

    /// Short day label, "Mon 3 Jun" or "man. 3. jun."
    #[must_use]
    pub fn day_label(self, date: NaiveDate) -> String {
        let weekday = date.weekday().num_days_from_monday() as usize;
        let month = date.month0() as usize;
        match self {
            Language::No => format!(
                "{} {}. {}",
                NO_WEEKDAYS[weekday],
                date.day(),
                NO_MONTHS[month]
            ),
            Language::En => format!(
                "{} {} {}",
                EN_WEEKDAYS[weekday],
                date.day(),
                EN_MONTHS[month]
            ),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no" | "nb" => Ok(Language::No),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language '{other}', expected 'no' or 'en'")),
        }
    }
}

const NO_WEEKDAYS: [&str; 7] = ["man.", "tir.", "ons.", "tor.", "fre.", "lør.", "søn."];
const NO_MONTHS: [&str; 12] = [
    "jan.", "feb.", "mar.", "apr.", "mai", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.", "des.",
];
const EN_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Every translatable UI string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Eyebrow,
    Title,
    Subtitle,
    StatusLabel,
    UseLocation,
    RadiusHint,
    SearchPlaceholder,
    SearchButton,
    CoursesTitle,
    ForecastTitle,
    FooterNote,
    StatusIdleTitle,
    StatusIdleMessage,
    StatusLoading,
    StatusGolf,
    StatusNoGolf,
    StatusError,
    StatusLocationDenied,
    CoursesMeta,
    CoursesEmpty,
    SelectCourse,
    ForecastEmpty,
    DistanceKm,
    ForecastGood,
    ForecastBad,
    DefaultCourseName,
}

fn norwegian(key: TextKey) -> &'static str {
    match key {
        TextKey::Eyebrow => "Golfvær",
        TextKey::Title => "Finn golfvær der du er",
        TextKey::Subtitle => "Vi henter vær og viser om det er gode forhold for golf.",
        TextKey::StatusLabel => "Dagens vurdering",
        TextKey::UseLocation => "Bruk min posisjon",
        TextKey::RadiusHint => "Søker {radius} km rundt deg",
        TextKey::SearchPlaceholder => "Søk etter sted (fallback)",
        TextKey::SearchButton => "Søk",
        TextKey::CoursesTitle => "Golfbaner i nærheten",
        TextKey::ForecastTitle => "7-dagers vær",
        TextKey::FooterNote => "Værdata fra met.no. Golfbaner fra OpenStreetMap.",
        TextKey::StatusIdleTitle => "Velg en bane",
        TextKey::StatusIdleMessage => "Bruk posisjon for å finne golfbaner i nærheten.",
        TextKey::StatusLoading => "Henter data ...",
        TextKey::StatusGolf => "Golfvær i dag",
        TextKey::StatusNoGolf => "Ikke golfvær i dag",
        TextKey::StatusError => "Noe gikk galt. Prøv igjen.",
        TextKey::StatusLocationDenied => "Kunne ikke hente posisjon.",
        TextKey::CoursesMeta => "Funnet {count} baner innen {radius} km.",
        TextKey::CoursesEmpty => "Ingen golfbaner funnet. Prøv et annet sted.",
        TextKey::SelectCourse => "Se vær",
        TextKey::ForecastEmpty => "Ingen værdata for denne banen.",
        TextKey::DistanceKm => "{value} km unna",
        TextKey::ForecastGood => "Golfvær",
        TextKey::ForecastBad => "Ikke golfvær",
        TextKey::DefaultCourseName => "Golfbane",
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Eyebrow => "Golf weather",
        TextKey::Title => "Find golf weather near you",
        TextKey::Subtitle => "We fetch forecasts and show if conditions suit golf.",
        TextKey::StatusLabel => "Today",
        TextKey::UseLocation => "Use my location",
        TextKey::RadiusHint => "Searching {radius} km around you",
        TextKey::SearchPlaceholder => "Search for place (fallback)",
        TextKey::SearchButton => "Search",
        TextKey::CoursesTitle => "Nearby golf courses",
        TextKey::ForecastTitle => "7-day forecast",
        TextKey::FooterNote => "Weather data from met.no. Courses from OpenStreetMap.",
        TextKey::StatusIdleTitle => "Pick a course",
        TextKey::StatusIdleMessage => "Use your location to find nearby golf courses.",
        TextKey::StatusLoading => "Loading data ...",
        TextKey::StatusGolf => "Golf weather today",
        TextKey::StatusNoGolf => "Not golf weather today",
        TextKey::StatusError => "Something went wrong. Try again.",
        TextKey::StatusLocationDenied => "Could not get your location.",
        TextKey::CoursesMeta => "Found {count} courses within {radius} km.",
        TextKey::CoursesEmpty => "No golf courses found. Try another place.",
        TextKey::SelectCourse => "See weather",
        TextKey::ForecastEmpty => "No forecast available for this course.",
        TextKey::DistanceKm => "{value} km away",
        TextKey::ForecastGood => "Golf weather",
        TextKey::ForecastBad => "Not golf weather",
        TextKey::DefaultCourseName => "Golf course",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_is_norwegian() {
        assert_eq!(Language::default(), Language::No);
    }

    #[test]
    fn test_toggle_flips_back_and_forth() {
        assert_eq!(Language::No.toggled(), Language::En);
        assert_eq!(Language::No.toggled().toggled(), Language::No);
    }

    #[test]
    fn test_translate_interpolates_vars() {
        assert_eq!(
            Language::En.translate(TextKey::CoursesMeta, &[("count", "3"), ("radius", "40")]),
            "Found 3 courses within 40 km."
        );
        assert_eq!(
            Language::No.translate(TextKey::DistanceKm, &[("value", "4.2")]),
            "4.2 km unna"
        );
    }

    #[test]
    fn test_unknown_vars_leave_text_untouched() {
        assert_eq!(
            Language::En.translate(TextKey::StatusGolf, &[("count", "1")]),
            "Golf weather today"
        );
    }

    #[rstest]
    #[case(Language::En, 2024, 6, 3, "Mon 3 Jun")]
    #[case(Language::No, 2024, 6, 3, "man. 3. jun.")]
    #[case(Language::En, 2024, 12, 29, "Sun 29 Dec")]
    #[case(Language::No, 2024, 5, 17, "fre. 17. mai")]
    fn test_day_label(
        #[case] language: Language,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: &str,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        assert_eq!(language.day_label(date), expected);
    }

    #[rstest]
    #[case("no", Language::No)]
    #[case("NB", Language::No)]
    #[case("en", Language::En)]
    fn test_parse_language(#[case] input: &str, #[case] expected: Language) {
        assert_eq!(input.parse::<Language>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_language() {
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let parsed: Language = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(parsed, Language::No);
    }
}
