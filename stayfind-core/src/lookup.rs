use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::criteria::Visitors;
use crate::rooms::RoomsData;

/// The payload handed to the availability lookup. Matches the endpoint's
/// camelCase wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsQuery {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub visitors: Visitors,
}

/// Failure of a single lookup. Stored verbatim in the search outcome and
/// shown to the user; never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Endpoint returned {status}: {message}")]
    Endpoint { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// External collaborator that resolves room availability for given criteria.
#[async_trait]
pub trait RoomsLookup: Send + Sync {
    async fn fetch_rooms(&self, query: &RoomsQuery) -> Result<RoomsData, LookupError>;
}
