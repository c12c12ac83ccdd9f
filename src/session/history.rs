use std::collections::VecDeque;

/// Default number of remembered searches
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Recent searches, newest first.
///
/// Entries are unique ignoring case; re-adding one moves it to the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY) + 1),
            capacity,
        }
    }

    /// Record a search, returning whether it was stored. Blank queries and
    /// zero-capacity histories store nothing.
    pub fn add_search_history(&mut self, query: &str) -> bool {
        let trimmed = query.trim();
        if trimmed.is_empty() || self.capacity == 0 {
            return false;
        }

        let folded = trimmed.to_lowercase();
        self.entries.retain(|entry| entry.to_lowercase() != folded);
        self.entries.push_front(trimmed.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
