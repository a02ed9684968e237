//! Error types and handling for the loopweer application

use thiserror::Error;

/// Main error type for the loopweer application
#[derive(Error, Debug)]
pub enum LoopweerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// A geocoding query produced no results
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl LoopweerError {
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

    /// Create a new location-not-found error
    pub fn location_not_found<S: Into<String>>(query: S) -> Self {
        Self::LocationNotFound {
            query: query.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LoopweerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            LoopweerError::Api { .. } => {
                "Could not retrieve weather data. Please check your internet connection."
                    .to_string()
            }
            LoopweerError::LocationNotFound { query } => {
                format!("No location found for '{query}'. Try another name or coordinates.")
            }
            LoopweerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            LoopweerError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = LoopweerError::config("missing base url");
        assert!(matches!(config_err, LoopweerError::Config { .. }));

        let api_err = LoopweerError::api("connection failed");
        assert!(matches!(api_err, LoopweerError::Api { .. }));

        let validation_err = LoopweerError::validation("invalid coordinates");
        assert!(matches!(validation_err, LoopweerError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let api_err = LoopweerError::api("test");
        assert!(api_err.user_message().contains("Could not retrieve"));

        let not_found = LoopweerError::location_not_found("Atlantis");
        assert!(not_found.user_message().contains("Atlantis"));

        let validation_err = LoopweerError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }
}
