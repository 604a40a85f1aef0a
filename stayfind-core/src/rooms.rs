use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lookup::LookupError;

/// A single available room as returned by the lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOption {
    pub id: Uuid,
    pub name: String,
    pub capacity: u32,
    pub price_amount: i32,
    pub price_currency: String,
}

pub type RoomsData = Vec<RoomOption>;

/// Outcome of the most recently triggered search. Each new trigger discards
/// the previous value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchOutcome {
    #[default]
    Idle,
    Loading,
    Succeeded(RoomsData),
    Failed(LookupError),
}

impl SearchOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchOutcome::Loading)
    }

    pub fn rooms_data(&self) -> Option<&RoomsData> {
        match self {
            SearchOutcome::Succeeded(rooms) => Some(rooms),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            SearchOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_option_deserialization() {
        let json = r#"
            {
                "id": "7f8e2c1a-4b3d-4e5f-9a0b-1c2d3e4f5a6b",
                "name": "Double Deluxe",
                "capacity": 3,
                "priceAmount": 120,
                "priceCurrency": "EUR"
            }
        "#;
        let room: RoomOption = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(room.name, "Double Deluxe");
        assert_eq!(room.price_amount, 120);
        assert_eq!(room.price_currency, "EUR");
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = SearchOutcome::Loading;
        assert!(outcome.is_loading());
        assert!(outcome.rooms_data().is_none());
        assert!(outcome.error().is_none());

        let outcome = SearchOutcome::Failed(LookupError::Transport("boom".into()));
        assert!(!outcome.is_loading());
        assert!(outcome.error().is_some());
    }
}
