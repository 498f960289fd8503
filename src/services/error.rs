//! Error types for the dashboard's external integrations

use thiserror::Error;

/// Errors resolving the car's position
#[derive(Debug, Error)]
pub enum LocationError {
    /// Location lookup is turned off in the configuration
    #[error("Geolocation is not supported")]
    Disabled,

    /// The lookup service refused to locate us
    #[error("Location denied: {0}")]
    Denied(String),

    /// HTTP request failed
    #[error("Location request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Errors fetching the current weather
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key in the environment, config or keyring
    #[error("Weather API key not configured. Run `roadie weather-key set <KEY>`")]
    ApiKeyNotFound,

    /// HTTP request failed
    #[error("Weather request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// API returned an error response
    #[error("Weather API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Body was not the expected shape
    #[error("Malformed weather response: {0}")]
    Malformed(String),
}

/// Errors submitting a trip plan
#[derive(Debug, Error)]
pub enum PlannerError {
    /// HTTP request failed
    #[error("Could not reach the trip planner: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Planner answered with a non-success status
    #[error("Trip planner rejected the request ({status})")]
    Rejected {
        /// HTTP status code
        status: u16,
    },
}

/// Errors managing the stored weather API key
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// Failed to access system keyring
    #[error("Failed to access keyring: {0}")]
    KeyringError(String),

    /// Key does not look like an OpenWeatherMap key
    #[error("Invalid API key format. Expected 32 hexadecimal characters")]
    InvalidApiKey,
}

impl WeatherError {
    /// Check if this error means the feature cannot work until reconfigured
    pub fn requires_setup(&self) -> bool {
        matches!(self, WeatherError::ApiKeyNotFound | WeatherError::ApiError { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_requires_setup() {
        assert!(WeatherError::ApiKeyNotFound.requires_setup());
        assert!(WeatherError::ApiError { status: 401, message: String::new() }.requires_setup());
        assert!(!WeatherError::Malformed("x".into()).requires_setup());
    }

    #[test]
    fn missing_key_names_the_set_command() {
        let message = WeatherError::ApiKeyNotFound.to_string();
        assert!(message.contains("roadie weather-key set <KEY>"), "{message}");
    }

    #[test]
    fn disabled_location_reads_as_alert() {
        assert_eq!(LocationError::Disabled.to_string(), "Geolocation is not supported");
    }
}
