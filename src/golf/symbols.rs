//! Mapping from provider symbol codes to short condition labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pictorial weather condition shown on a forecast card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionIcon {
    #[serde(rename = "SUN")]
    Sun,
    #[serde(rename = "SUN/CLOUD")]
    SunCloud,
    #[serde(rename = "CLOUD")]
    Cloud,
    #[serde(rename = "RAIN")]
    Rain,
    #[serde(rename = "HEAVY RAIN")]
    HeavyRain,
    #[serde(rename = "SNOW")]
    Snow,
    #[serde(rename = "SLEET")]
    Sleet,
    #[serde(rename = "FOG")]
    Fog,
    #[serde(rename = "STORM")]
    Storm,
    /// Anything the lexicon does not know
    #[serde(rename = "VAR")]
    Variable,
}

impl ConditionIcon {
    /// Map a symbol code by its prefix before the first underscore.
    ///
    /// `rainshowers_day` and `rainshowers_night` both map to [`ConditionIcon::Rain`].
    #[must_use]
    pub fn from_symbol_code(code: &str) -> Self {
        let base = code.split_once('_').map_or(code, |(base, _)| base);
        match base {
            "clearsky" | "fair" => ConditionIcon::Sun,
            "partlycloudy" => ConditionIcon::SunCloud,
            "cloudy" => ConditionIcon::Cloud,
            "rainshowers" | "rain" => ConditionIcon::Rain,
            "heavyrain" => ConditionIcon::HeavyRain,
            "lightsnow" | "snow" => ConditionIcon::Snow,
            "sleet" => ConditionIcon::Sleet,
            "fog" => ConditionIcon::Fog,
            "thunderstorm" => ConditionIcon::Storm,
            _ => ConditionIcon::Variable,
        }
    }

    #[must_use]
    pub fn from_symbol(code: Option<&str>) -> Self {
        code.map_or(ConditionIcon::Variable, Self::from_symbol_code)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ConditionIcon::Sun => "SUN",
            ConditionIcon::SunCloud => "SUN/CLOUD",
            ConditionIcon::Cloud => "CLOUD",
            ConditionIcon::Rain => "RAIN",
            ConditionIcon::HeavyRain => "HEAVY RAIN",
            ConditionIcon::Snow => "SNOW",
            ConditionIcon::Sleet => "SLEET",
            ConditionIcon::Fog => "FOG",
            ConditionIcon::Storm => "STORM",
            ConditionIcon::Variable => "VAR",
        }
    }
}

impl fmt::Display for ConditionIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
