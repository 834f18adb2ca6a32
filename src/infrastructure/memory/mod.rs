//! In-memory adapters shaped like the managed backend: the store assigns
//! document ids and timestamps, and pagination resumes strictly after a
//! cursor-anchored document. Used by tests and local development; production
//! deployments plug the real SDK in behind the same traits.

pub mod category_store;
pub mod media;
pub mod post_store;

pub use category_store::MemoryCategoryStore;
pub use media::MemoryMediaStore;
pub use post_store::MemoryPostStore;
