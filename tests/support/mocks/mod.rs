pub mod stores;
pub mod time;
