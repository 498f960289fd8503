//! Trip planning endpoint client

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::PlannerError;

/// Body posted to the planning endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub start: String,
    pub end: String,
}

/// Planning endpoint client
#[derive(Debug, Clone)]
pub struct PlannerClient {
    client: Client,
    url: String,
}

impl PlannerClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    /// POST the plan; any 2xx counts as confirmed, the body is ignored
    pub async fn submit(&self, request: &PlanRequest) -> Result<(), PlannerError> {
        tracing::info!("Submitting trip plan to {}", self.url);
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::Rejected { status: status.as_u16() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_start_then_end() {
        let request = PlanRequest { start: "A".into(), end: "B".into() };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"start":"A","end":"B"}"#);
    }
}
