use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use stayfind_core::{LookupError, RoomsData, RoomsLookup, RoomsQuery};

/// Availability lookup against an HTTP endpoint: POSTs the query as JSON and
/// expects a JSON array of room options back.
pub struct HttpRoomsLookup {
    client: Client,
    endpoint: String,
}

impl HttpRoomsLookup {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RoomsLookup for HttpRoomsLookup {
    async fn fetch_rooms(&self, query: &RoomsQuery) -> Result<RoomsData, LookupError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(query)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LookupError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<RoomsData>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}
