use crate::config::ExploreConfig;
use crate::explore::FilterState;
use crate::models::Property;
use crate::session::{SavedSet, SearchHistory};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

/// Change notification published by a [`Session`]
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    FilterChanged,
    SavedToggled { id: Uuid, saved: bool },
    HistoryChanged,
}

/// State owned by one browsing session: filters, favorites and recent
/// searches.
///
/// Views hold a receiver from [`Session::subscribe`] and re-render when an
/// event arrives. All mutation goes through methods here so every change is
/// published.
pub struct Session {
    filter: FilterState,
    saved: SavedSet,
    history: SearchHistory,
    events_tx: broadcast::Sender<SessionEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_history(SearchHistory::new())
    }

    pub fn from_config(config: &ExploreConfig) -> Self {
        Self::with_history(SearchHistory::with_capacity(config.history_capacity))
    }

    fn with_history(history: SearchHistory) -> Self {
        let (events_tx, _) = broadcast::channel(100);
        Self {
            filter: FilterState::default(),
            saved: SavedSet::new(),
            history,
            events_tx,
        }
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events_tx.send(event);
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Edit the filter state in place
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut FilterState)) {
        let before = self.filter.clone();
        edit(&mut self.filter);
        if self.filter != before {
            debug!(active = self.filter.active_filter_count(), "Filter changed");
            self.publish(SessionEvent::FilterChanged);
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update_filter(|f| f.search_text = text);
    }

    pub fn reset_filters(&mut self) {
        self.update_filter(FilterState::reset_filters);
    }

    pub fn saved(&self) -> &SavedSet {
        &self.saved
    }

    pub fn is_saved(&self, id: Uuid) -> bool {
        self.saved.is_saved(id)
    }

    pub fn toggle_saved(&mut self, id: Uuid) -> bool {
        let saved = self.saved.toggle_saved(id);
        debug!(%id, saved, "Toggled favorite");
        self.publish(SessionEvent::SavedToggled { id, saved });
        saved
    }

    pub fn saved_properties<'a>(&self, catalog: &'a [Property]) -> Vec<&'a Property> {
        self.saved.saved_properties(catalog)
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn add_search_history(&mut self, query: &str) {
        if self.history.add_search_history(query) {
            self.publish(SessionEvent::HistoryChanged);
        }
    }

    /// Remember the current search text, as done when a result is opened
    /// from the search tab
    pub fn commit_search(&mut self) {
        let query = self.filter.search_text.clone();
        self.add_search_history(&query);
    }
}
