//! External integrations: position lookup, weather provider and trip planner
//!
//! Every call here is a single request with no retry. Failures are returned
//! as typed errors and turned into `*Did*` actions by the app.

pub mod auth;
pub mod error;
pub mod location;
pub mod planner;
pub mod weather;

use std::time::Duration;

pub use auth::WeatherKeyStore;
pub use error::{KeyStoreError, LocationError, PlannerError, WeatherError};
pub use location::{Coordinates, LocationSource, Locator};
pub use planner::{PlanRequest, PlannerClient};
pub use weather::{WeatherClient, WeatherSnapshot};

/// Build the shared HTTP client
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
