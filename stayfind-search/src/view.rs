use stayfind_core::{LookupError, RoomsData, SearchOutcome};

/// What a renderer needs to draw the search area: at most one of the three
/// fields is populated at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchView {
    pub is_loading: bool,
    pub error: Option<LookupError>,
    pub rooms_data: Option<RoomsData>,
}

impl SearchView {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
            rooms_data: None,
        }
    }
}

impl From<SearchOutcome> for SearchView {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Idle => Self::idle(),
            SearchOutcome::Loading => Self::loading(),
            SearchOutcome::Succeeded(rooms) => Self {
                is_loading: false,
                error: None,
                rooms_data: Some(rooms),
            },
            SearchOutcome::Failed(err) => Self {
                is_loading: false,
                error: Some(err),
                rooms_data: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_clears_prior_fields() {
        let view = SearchView::from(SearchOutcome::Loading);
        assert!(view.is_loading);
        assert!(view.error.is_none());
        assert!(view.rooms_data.is_none());
    }

    #[test]
    fn test_failed_clears_loading_and_rooms() {
        let err = LookupError::Transport("connection refused".into());
        let view = SearchView::from(SearchOutcome::Failed(err.clone()));
        assert!(!view.is_loading);
        assert_eq!(view.error, Some(err));
        assert!(view.rooms_data.is_none());
    }

    #[test]
    fn test_succeeded_carries_rooms() {
        let view = SearchView::from(SearchOutcome::Succeeded(Vec::new()));
        assert!(!view.is_loading);
        assert!(view.error.is_none());
        assert_eq!(view.rooms_data, Some(Vec::new()));
    }
}
