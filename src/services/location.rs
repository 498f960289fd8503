//! Resolving the car's position

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::LocationError;

/// A position on the globe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where the position comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LocationSource {
    /// A fixed position from the configuration
    Fixed { latitude: f64, longitude: f64 },
    /// Look the position up from the public IP address
    #[default]
    Ip,
    /// No position is available
    Disabled,
}

/// IP lookup response (ip-api.com shape)
#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Resolves a single position fix
#[derive(Debug, Clone)]
pub struct Locator {
    client: Client,
    source: LocationSource,
    ip_lookup_url: String,
}

impl Locator {
    pub fn new(client: Client, source: LocationSource, ip_lookup_url: impl Into<String>) -> Self {
        Self { client, source, ip_lookup_url: ip_lookup_url.into() }
    }

    /// Request the current position once
    pub async fn locate(&self) -> Result<Coordinates, LocationError> {
        match &self.source {
            LocationSource::Fixed { latitude, longitude } => {
                Ok(Coordinates { latitude: *latitude, longitude: *longitude })
            }
            LocationSource::Disabled => Err(LocationError::Disabled),
            LocationSource::Ip => self.lookup_ip().await,
        }
    }

    async fn lookup_ip(&self) -> Result<Coordinates, LocationError> {
        tracing::info!("Looking up position from {}", self.ip_lookup_url);
        let response = self.client.get(&self.ip_lookup_url).send().await?.error_for_status()?;
        let body: IpLookupResponse = response.json().await?;
        parse_ip_lookup(body)
    }
}

fn parse_ip_lookup(body: IpLookupResponse) -> Result<Coordinates, LocationError> {
    if body.status.as_deref() == Some("fail") {
        return Err(LocationError::Denied(
            body.message.unwrap_or_else(|| "lookup failed".to_string()),
        ));
    }
    match (body.lat, body.lon) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
        _ => Err(LocationError::Denied("no coordinates in lookup response".to_string())),
    }
}
