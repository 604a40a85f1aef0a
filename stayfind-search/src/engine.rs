use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, error};

use stayfind_core::{RoomsLookup, SearchCriteria, SearchOutcome};

use crate::view::SearchView;

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Quiet period after the last criteria change before the lookup fires.
    pub quiet_period: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(500),
        }
    }
}

/// Debounced rooms search.
///
/// Owns the current [`SearchCriteria`] and publishes a [`SearchView`] to
/// subscribers. Every criteria edit (and every explicit [`search`] call)
/// publishes Loading, aborts the pending delayed lookup if one exists and
/// arms a new one, so at most one delayed task is alive at any time and only
/// the last criteria within a quiet window is ever looked up.
///
/// Each armed task carries a generation number; a settlement is applied only
/// while its generation is still the latest issued, so a slow response that
/// was superseded mid-flight can never overwrite fresher state.
///
/// Must be created and edited inside a tokio runtime. Dropping the engine
/// aborts the pending task.
///
/// [`search`]: SearchEngine::search
pub struct SearchEngine {
    criteria: SearchCriteria,
    lookup: Arc<dyn RoomsLookup>,
    quiet_period: Duration,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    view_tx: watch::Sender<SearchView>,
}

impl SearchEngine {
    pub fn new(lookup: Arc<dyn RoomsLookup>, config: EngineConfig) -> Self {
        let (view_tx, _) = watch::channel(SearchView::idle());
        Self {
            criteria: SearchCriteria::new(),
            lookup,
            quiet_period: config.quiet_period,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
            view_tx,
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Current view state, without subscribing.
    pub fn view(&self) -> SearchView {
        self.view_tx.borrow().clone()
    }

    /// Observe view state changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.view_tx.subscribe()
    }

    pub fn set_date_from(&mut self, date: chrono::NaiveDate) {
        self.criteria.set_date_from(date);
        self.arm();
    }

    pub fn set_date_to(&mut self, date: chrono::NaiveDate) {
        self.criteria.set_date_to(date);
        self.arm();
    }

    pub fn set_adults_number(&mut self, count: u32) {
        self.criteria.set_adults_number(count);
        self.arm();
    }

    pub fn set_children_number(&mut self, count: u32) {
        self.criteria.set_children_number(count);
        self.arm();
    }

    /// Trigger a search with the current criteria, going through the same
    /// quiet period as an edit.
    pub fn search(&mut self) {
        self.arm();
    }

    fn arm(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view_tx.send_replace(SearchView::loading());

        let query = self.criteria.to_query();
        let lookup = Arc::clone(&self.lookup);
        let latest = Arc::clone(&self.generation);
        let view_tx = self.view_tx.clone();
        let quiet_period = self.quiet_period;

        debug!(generation, "criteria settled pending quiet period, arming lookup");

        self.pending = Some(tokio::spawn(async move {
            time::sleep(quiet_period).await;

            debug!(generation, ?query, "quiet period elapsed, fetching rooms");
            let result = lookup.fetch_rooms(&query).await;

            // A newer arm supersedes this one even if abort lost the race.
            if latest.load(Ordering::SeqCst) != generation {
                debug!(generation, "lookup settled after newer input, discarding");
                return;
            }

            let outcome = match result {
                Ok(rooms) => {
                    debug!(generation, rooms = rooms.len(), "rooms lookup succeeded");
                    SearchOutcome::Succeeded(rooms)
                }
                Err(err) => {
                    error!(generation, %err, "rooms lookup failed");
                    SearchOutcome::Failed(err)
                }
            };
            view_tx.send_replace(SearchView::from(outcome));
        }));
    }
}

impl Drop for SearchEngine {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use stayfind_core::{LookupError, RoomsData, RoomsQuery};

    struct NeverLookup;

    #[async_trait]
    impl RoomsLookup for NeverLookup {
        async fn fetch_rooms(&self, _query: &RoomsQuery) -> Result<RoomsData, LookupError> {
            unreachable!("lookup must not fire in these tests")
        }
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let engine = SearchEngine::new(Arc::new(NeverLookup), EngineConfig::default());
        assert_eq!(engine.view(), SearchView::idle());
    }

    #[tokio::test]
    async fn test_edit_publishes_loading_immediately() {
        let mut engine = SearchEngine::new(Arc::new(NeverLookup), EngineConfig::default());
        engine.set_adults_number(3);
        let view = engine.view();
        assert!(view.is_loading);
        assert!(view.rooms_data.is_none());
        assert!(view.error.is_none());
        assert_eq!(engine.criteria().visitors.adults_number, 3);
    }

    #[test]
    fn test_default_quiet_period() {
        assert_eq!(
            EngineConfig::default().quiet_period,
            Duration::from_millis(500)
        );
    }
}
