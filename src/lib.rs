//! Client-side publishing core for a document-store backed blog.
//!
//! The crate owns the listing/search coordination consumed by UI code:
//! cursor-based pagination with category filtering, a two-signal
//! (title-prefix + exact-tag) search merge, and the debounced, keyboard
//! navigable search surface. Persistence, auth, and media hosting live
//! behind narrow ports; an in-memory store is provided for tests and
//! local development.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
