//! OpenWeatherMap "current weather" client

use reqwest::Client;
use serde::Deserialize;

use super::error::WeatherError;
use super::location::Coordinates;

/// Current conditions at a position
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Condition group, e.g. "Clouds"
    pub condition: String,
    pub temperature_c: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    weather: Vec<Condition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

/// Weather provider client
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl WeatherClient {
    /// Default provider endpoint
    pub const DEFAULT_URL: &'static str = "https://api.openweathermap.org/data/2.5/weather";

    pub fn new(client: Client, url: impl Into<String>, api_key: Option<String>) -> Self {
        Self { client, url: url.into(), api_key }
    }

    /// Fetch the current conditions, in metric units
    pub async fn current(&self, at: Coordinates) -> Result<WeatherSnapshot, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::ApiKeyNotFound)?;

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::ApiError { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        parse_current(&body)
    }
}

/// Parse a current-weather body into a snapshot
pub fn parse_current(body: &str) -> Result<WeatherSnapshot, WeatherError> {
    let parsed: CurrentWeatherResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Malformed(e.to_string()))?;
    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Malformed("empty weather list".to_string()))?;
    Ok(WeatherSnapshot { condition: condition.main, temperature_c: parsed.main.temp })
}
