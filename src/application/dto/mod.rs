pub mod categories;
pub mod pagination;
pub mod posts;
pub mod session;

pub use categories::CategoryDto;
pub use pagination::CursorPage;
pub use posts::PostDto;
pub use session::Session;
