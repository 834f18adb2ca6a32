pub mod category;
pub mod errors;
pub mod post;
pub mod user;
