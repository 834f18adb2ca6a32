pub mod identity;
pub mod media;
pub mod time;
