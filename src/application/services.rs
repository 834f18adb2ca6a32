// src/application/services.rs
use std::sync::Arc;
use std::time::Duration;

use crate::application::commands::posts::PostCommandService;
use crate::application::ports::media::MediaStore;
use crate::application::queries::{CategoryQueryService, PostQueryService};
use crate::domain::category::CategoryStore;
use crate::domain::post::{PostReadStore, PostWriteStore};

/// Wiring aggregate: builds the query and command services over the supplied
/// store adapters. UI layers construct controllers on top of these.
pub struct ApplicationServices {
    pub post_queries: Arc<PostQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_read_store: Arc<dyn PostReadStore>,
        post_write_store: Arc<dyn PostWriteStore>,
        category_store: Arc<dyn CategoryStore>,
        media_store: Arc<dyn MediaStore>,
        query_timeout: Duration,
    ) -> Self {
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_store),
            query_timeout,
        ));
        let post_commands = Arc::new(PostCommandService::new(
            post_write_store,
            post_read_store,
            Arc::clone(&category_store),
            media_store,
        ));
        let category_queries = Arc::new(CategoryQueryService::new(category_store));

        Self {
            post_queries,
            post_commands,
            category_queries,
        }
    }
}
