pub mod listing;
pub mod search;

pub use listing::{ListingController, ListingPhase, ListingSnapshot};
pub use search::{SearchAction, SearchController, SearchKey, SearchPhase, SearchSnapshot};
