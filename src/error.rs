//! Error types and handling for the golf weather application

use thiserror::Error;

/// Main error type for the golf weather application
#[derive(Error, Debug)]
pub enum GolfWeatherError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A provider answered, but not with something we can use
    #[error("API error: {message}")]
    Api { message: String },

    /// Transport failures (connection refused, timeout, DNS, ...)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Provider payload could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// No device position could be obtained
    #[error("Location unavailable: {message}")]
    LocationUnavailable { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GolfWeatherError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new location-unavailable error
    pub fn location_unavailable<S: Into<String>>(message: S) -> Self {
        Self::LocationUnavailable {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GolfWeatherError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            GolfWeatherError::Api { .. }
            | GolfWeatherError::Network { .. }
            | GolfWeatherError::Parse { .. } => {
                "Unable to reach the weather or map services. Please try again.".to_string()
            }
            GolfWeatherError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            GolfWeatherError::LocationUnavailable { .. } => {
                "Could not get your location.".to_string()
            }
            GolfWeatherError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
