// src/presentation/controllers/listing.rs
use crate::application::dto::PostDto;
use crate::application::queries::PostQueryService;
use crate::domain::category::CategoryId;
use crate::domain::post::{PageCursor, PostOrder};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingPhase {
    Idle,
    Loading,
    Ready,
    LoadingMore,
    Error(String),
}

/// What the listing view renders: the accumulated posts plus the flags that
/// drive the spinner, the error banner, and the infinite-scroll trigger.
#[derive(Debug, Clone)]
pub struct ListingSnapshot {
    pub filter: Option<CategoryId>,
    pub phase: ListingPhase,
    pub posts: Vec<PostDto>,
    pub exhausted: bool,
}

struct ListingInner {
    filter: Option<CategoryId>,
    phase: ListingPhase,
    posts: Vec<PostDto>,
    cursor: Option<PageCursor>,
    exhausted: bool,
    generation: u64,
}

/// Paging/filtering state machine behind the blog listing.
///
/// Methods take `&self` so the UI event loop can start a new fetch while an
/// older one is still in flight; the monotonic generation counter decides
/// which response is allowed to land. The lock is never held across an
/// await.
pub struct ListingController {
    queries: Arc<PostQueryService>,
    page_size: u32,
    order: PostOrder,
    inner: Mutex<ListingInner>,
}

impl ListingController {
    pub fn new(queries: Arc<PostQueryService>, page_size: u32) -> Self {
        Self {
            queries,
            page_size,
            order: PostOrder::newest_first(),
            inner: Mutex::new(ListingInner {
                filter: None,
                phase: ListingPhase::Idle,
                posts: Vec::new(),
                cursor: None,
                exhausted: false,
                generation: 0,
            }),
        }
    }

    /// Switch the active filter (`None` = "All") and refetch from the top.
    /// Any in-flight fetch is superseded; its response will be discarded.
    /// Re-selecting the current filter behaves as a refresh.
    pub async fn select_category(&self, filter: Option<CategoryId>) {
        let generation = {
            let mut inner = self.state();
            inner.generation += 1;
            inner.filter = filter.clone();
            inner.posts.clear();
            inner.cursor = None;
            inner.exhausted = false;
            inner.phase = ListingPhase::Loading;
            inner.generation
        };

        let outcome = self
            .queries
            .initial_page(filter.as_ref(), self.page_size, self.order)
            .await;

        let mut inner = self.state();
        if inner.generation != generation {
            tracing::debug!(generation, "discarding superseded initial page");
            return;
        }
        match outcome {
            Ok(page) => {
                inner.exhausted = !page.has_more;
                inner.cursor = page.next_cursor;
                inner.posts = page.items;
                inner.phase = ListingPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "initial page fetch failed");
                inner.phase = ListingPhase::Error(err.to_string());
                // Stop further automatic load attempts until the filter
                // changes again.
                inner.exhausted = true;
            }
        }
    }

    /// Viewport-proximity trigger. Ignored unless the listing is `Ready`,
    /// not exhausted, and holds a cursor; a missing cursor repairs to
    /// exhausted instead of issuing an unanchored query.
    pub async fn load_more(&self) {
        let (generation, cursor, filter) = {
            let mut inner = self.state();
            if inner.phase != ListingPhase::Ready || inner.exhausted {
                return;
            }
            let Some(cursor) = inner.cursor.clone() else {
                inner.exhausted = true;
                return;
            };
            inner.generation += 1;
            inner.phase = ListingPhase::LoadingMore;
            (inner.generation, cursor, inner.filter.clone())
        };

        let outcome = self
            .queries
            .next_page(&cursor, filter.as_ref(), self.page_size, self.order)
            .await;

        let mut inner = self.state();
        if inner.generation != generation {
            tracing::debug!(generation, "discarding superseded next page");
            return;
        }
        match outcome {
            Ok(page) => {
                inner.exhausted = !page.has_more;
                inner.cursor = page.next_cursor;
                inner.posts.extend(page.items);
                inner.phase = ListingPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "next page fetch failed");
                inner.phase = ListingPhase::Error(err.to_string());
            }
        }
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        let inner = self.state();
        ListingSnapshot {
            filter: inner.filter.clone(),
            phase: inner.phase.clone(),
            posts: inner.posts.clone(),
            exhausted: inner.exhausted,
        }
    }

    fn state(&self) -> MutexGuard<'_, ListingInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
