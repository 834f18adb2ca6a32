pub mod posts;

pub use posts::{CreatePostCommand, DeletePostCommand, PostCommandService, UpdatePostCommand};
