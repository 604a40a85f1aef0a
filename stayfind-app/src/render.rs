use stayfind_search::SearchView;

/// Plain-text rendering of the search area: one of loading indicator, error
/// message or result list.
pub fn render(view: &SearchView) -> String {
    if view.is_loading {
        return "Searching rooms...".to_string();
    }
    if let Some(err) = &view.error {
        return format!("Search failed: {err}");
    }
    match &view.rooms_data {
        Some(rooms) if rooms.is_empty() => "No rooms available for these dates.".to_string(),
        Some(rooms) => {
            let mut out = format!("{} room(s) available:\n", rooms.len());
            for room in rooms {
                out.push_str(&format!(
                    "  {} (sleeps {}) - {} {}\n",
                    room.name, room.capacity, room.price_amount, room.price_currency
                ));
            }
            out
        }
        None => "Pick dates and visitors to search.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayfind_core::{LookupError, SearchOutcome};

    #[test]
    fn test_render_states() {
        assert_eq!(render(&SearchView::idle()), "Pick dates and visitors to search.");
        assert_eq!(render(&SearchView::loading()), "Searching rooms...");

        let failed = SearchView::from(SearchOutcome::Failed(LookupError::Transport(
            "connection refused".into(),
        )));
        assert!(render(&failed).contains("connection refused"));

        let empty = SearchView::from(SearchOutcome::Succeeded(Vec::new()));
        assert_eq!(render(&empty), "No rooms available for these dates.");
    }
}
