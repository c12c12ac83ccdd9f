use crate::models::{ListingType, PropertyCategory};
use serde::{Deserialize, Serialize};

/// Upper end of the price slider
pub const MAX_PRICE: u64 = 5_000_000;

/// Range and flag criteria edited in the filter sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilters {
    pub min_price: u64,
    pub max_price: u64,
    pub min_bedrooms: u32,
    pub min_bathrooms: f64,
    pub new_listing_only: bool,
    pub open_house_only: bool,
}

impl Default for PropertyFilters {
    fn default() -> Self {
        Self {
            min_price: 0,
            max_price: MAX_PRICE,
            min_bedrooms: 0,
            min_bathrooms: 0.0,
            new_listing_only: false,
            open_house_only: false,
        }
    }
}

impl PropertyFilters {
    /// Number of criteria that differ from their defaults
    pub fn active_count(&self) -> usize {
        let defaults = Self::default();
        let price_changed =
            self.min_price != defaults.min_price || self.max_price != defaults.max_price;
        [
            price_changed,
            self.min_bedrooms != defaults.min_bedrooms,
            self.min_bathrooms != defaults.min_bathrooms,
            self.new_listing_only,
            self.open_house_only,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// An inverted range (min above max) is kept as-is and simply matches
    /// nothing.
    pub fn price_range_is_inverted(&self) -> bool {
        self.min_price > self.max_price
    }
}

/// Everything the explore screen uses to narrow the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_category: PropertyCategory,
    pub selected_listing_type: ListingType,
    pub search_text: String,
    pub filters: PropertyFilters,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_category: PropertyCategory::Residential,
            selected_listing_type: ListingType::Sale,
            search_text: String::new(),
            filters: PropertyFilters::default(),
        }
    }
}

impl FilterState {
    /// Restore the sheet criteria, keeping category, listing type and search
    pub fn reset_filters(&mut self) {
        self.filters = PropertyFilters::default();
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    /// Trimmed, lowercased search text, or `None` when there is nothing to
    /// search for
    pub fn normalized_query(&self) -> Option<String> {
        normalize_query(&self.search_text)
    }
}

pub(crate) fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
