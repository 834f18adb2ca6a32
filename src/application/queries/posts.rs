// src/application/queries/posts.rs
use crate::application::dto::{CursorPage, PostDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::{PageCursor, PostId, PostOrder, PostReadStore};
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Queries shorter than this never reach the store; a one-character range
/// scan over titles is all cost and no signal.
pub const MIN_QUERY_LEN: usize = 2;

/// Highest code point in the store's private-use tail. Appending it to the
/// query turns a "starts with" intent into the closed range the store can
/// actually evaluate.
const TITLE_RANGE_SENTINEL: char = '\u{f8ff}';

/// Read-side entry point for post retrieval: initial page, cursor-resumed
/// next page, and the two-signal search merge. Every store round trip is
/// bounded by an explicit timeout so a stalled backend cannot wedge the UI
/// event loop.
pub struct PostQueryService {
    store: Arc<dyn PostReadStore>,
    query_timeout: Duration,
}

impl PostQueryService {
    pub fn new(store: Arc<dyn PostReadStore>, query_timeout: Duration) -> Self {
        Self {
            store,
            query_timeout,
        }
    }

    pub async fn initial_page(
        &self,
        filter: Option<&CategoryId>,
        page_size: u32,
        order: PostOrder,
    ) -> ApplicationResult<CursorPage<PostDto>> {
        let (posts, cursor) = self
            .bounded(self.store.list_page(filter, order, page_size, None))
            .await?;
        Ok(CursorPage::new(
            posts.into_iter().map(Into::into).collect(),
            cursor,
            page_size,
        ))
    }

    /// Resumes strictly after `cursor`. The cursor parameter being mandatory
    /// is deliberate: the "null cursor" precondition of the original contract
    /// is unrepresentable here.
    pub async fn next_page(
        &self,
        cursor: &PageCursor,
        filter: Option<&CategoryId>,
        page_size: u32,
        order: PostOrder,
    ) -> ApplicationResult<CursorPage<PostDto>> {
        let (posts, next) = self
            .bounded(self.store.list_page(filter, order, page_size, Some(cursor)))
            .await?;
        Ok(CursorPage::new(
            posts.into_iter().map(Into::into).collect(),
            next,
            page_size,
        ))
    }

    /// Two independent signals merged into one recency-ordered list: titles
    /// starting with the query (range scan, title order) and posts tagged
    /// with the query verbatim (newest first). Title hits take precedence in
    /// de-duplication. This is a heuristic, not a relevance ranking.
    pub async fn search(&self, raw_query: &str, limit: u32) -> ApplicationResult<Vec<PostDto>> {
        let query = raw_query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let upper = format!("{query}{TITLE_RANGE_SENTINEL}");
        // Both signals run concurrently under one shared timeout, so the
        // configured bound caps the whole search, not each leg.
        let (by_title, by_tag) = self
            .bounded(async {
                let (by_title, by_tag) = tokio::join!(
                    self.store.find_title_between(query, &upper, limit),
                    self.store.find_by_tag(query, Some(limit)),
                );
                Ok((by_title?, by_tag?))
            })
            .await?;

        let mut seen: HashSet<PostId> = HashSet::new();
        let mut merged = Vec::new();
        for post in by_title.into_iter().chain(by_tag) {
            if seen.insert(post.id.clone()) {
                merged.push(post);
            }
        }
        // Stable sort: ties keep title-before-tag precedence.
        merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        merged.truncate(limit as usize);

        Ok(merged.into_iter().map(Into::into).collect())
    }

    /// Absence is `Ok(None)`, never an error.
    pub async fn post_by_id(&self, id: &PostId) -> ApplicationResult<Option<PostDto>> {
        let post = self.bounded(self.store.find_by_id(id)).await?;
        Ok(post.map(Into::into))
    }

    /// All posts carrying `tag`, newest first.
    pub async fn posts_by_tag(&self, tag: &str) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.bounded(self.store.find_by_tag(tag, None)).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn bounded<T, F>(&self, query: F) -> ApplicationResult<T>
    where
        F: Future<Output = DomainResult<T>> + Send,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(outcome) => Ok(outcome?),
            Err(_) => {
                tracing::warn!(timeout = ?self.query_timeout, "store query timed out");
                Err(ApplicationError::Timeout(self.query_timeout))
            }
        }
    }
}
