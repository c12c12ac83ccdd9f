//! Property listing exploration: catalog loading, filtering, favorites and
//! search history for a real-estate browser.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod explore;
pub mod models;
pub mod reminders;
pub mod session;

pub use catalog::{Catalog, CatalogSource};
pub use explore::{Explorer, FilterState};
pub use models::Property;
pub use session::Session;
