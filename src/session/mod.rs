pub mod history;
pub mod saved;
pub mod store;

pub use history::{SearchHistory, DEFAULT_HISTORY_CAPACITY};
pub use saved::SavedSet;
pub use store::{Session, SessionEvent};
