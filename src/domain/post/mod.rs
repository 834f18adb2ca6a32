pub mod cursor;
pub mod entity;
pub mod repository;
pub mod value_objects;

#[cfg(test)]
mod cursor_tests;

pub use cursor::PageCursor;
pub use entity::{CategorySnapshot, NewPost, Post, PostUpdate};
pub use repository::{OrderDirection, PostOrder, PostOrderField, PostReadStore, PostWriteStore};
pub use value_objects::{PostId, PostTitle, TagList};
