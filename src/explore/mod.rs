pub mod engine;
pub mod filter;

pub use engine::{
    featured_properties, filtered_properties, hot_deals_properties, search_catalog,
    similar_properties, Explorer, FEATURED_LIMIT, HOT_DEALS_LIMIT, SIMILAR_LIMIT,
};
pub use filter::{FilterState, PropertyFilters, MAX_PRICE};
