// tests/support/mocks/stores.rs
use async_trait::async_trait;
use kawara_core::domain::category::CategoryId;
use kawara_core::domain::errors::{DomainError, DomainResult};
use kawara_core::domain::post::{PageCursor, Post, PostId, PostOrder, PostReadStore};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Counts every read the wrapped store receives. Used to prove both that
/// short queries never reach the store and that debouncing collapses bursts.
pub struct CountingPostStore {
    inner: Arc<dyn PostReadStore>,
    pages: AtomicUsize,
    title_queries: AtomicUsize,
    tag_queries: AtomicUsize,
    lookups: AtomicUsize,
}

impl CountingPostStore {
    pub fn new(inner: Arc<dyn PostReadStore>) -> Self {
        Self {
            inner,
            pages: AtomicUsize::new(0),
            title_queries: AtomicUsize::new(0),
            tag_queries: AtomicUsize::new(0),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn pages(&self) -> usize {
        self.pages.load(Ordering::SeqCst)
    }

    pub fn title_queries(&self) -> usize {
        self.title_queries.load(Ordering::SeqCst)
    }

    pub fn tag_queries(&self) -> usize {
        self.tag_queries.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.pages() + self.title_queries() + self.tag_queries() + self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostReadStore for CountingPostStore {
    async fn find_by_id(&self, id: &PostId) -> DomainResult<Option<Post>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn list_page(
        &self,
        filter: Option<&CategoryId>,
        order: PostOrder,
        limit: u32,
        after: Option<&PageCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PageCursor>)> {
        self.pages.fetch_add(1, Ordering::SeqCst);
        self.inner.list_page(filter, order, limit, after).await
    }

    async fn find_title_between(
        &self,
        lower: &str,
        upper: &str,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        self.title_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.find_title_between(lower, upper, limit).await
    }

    async fn find_by_tag(&self, tag: &str, limit: Option<u32>) -> DomainResult<Vec<Post>> {
        self.tag_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_tag(tag, limit).await
    }
}

/// Every read fails, the way a network-partitioned backend would.
pub struct FailingPostStore;

fn offline<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("store offline".into()))
}

#[async_trait]
impl PostReadStore for FailingPostStore {
    async fn find_by_id(&self, _id: &PostId) -> DomainResult<Option<Post>> {
        offline()
    }

    async fn list_page(
        &self,
        _filter: Option<&CategoryId>,
        _order: PostOrder,
        _limit: u32,
        _after: Option<&PageCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PageCursor>)> {
        offline()
    }

    async fn find_title_between(
        &self,
        _lower: &str,
        _upper: &str,
        _limit: u32,
    ) -> DomainResult<Vec<Post>> {
        offline()
    }

    async fn find_by_tag(&self, _tag: &str, _limit: Option<u32>) -> DomainResult<Vec<Post>> {
        offline()
    }
}

/// Delays page reads by a per-filter amount before delegating. Drives the
/// slow-query-resolves-last race deterministically under paused tokio time.
pub struct DelayedPostStore {
    inner: Arc<dyn PostReadStore>,
    default_delay: Duration,
    per_filter: HashMap<Option<String>, Duration>,
}

impl DelayedPostStore {
    pub fn new(inner: Arc<dyn PostReadStore>, default_delay: Duration) -> Self {
        Self {
            inner,
            default_delay,
            per_filter: HashMap::new(),
        }
    }

    pub fn with_filter_delay(mut self, filter: Option<&CategoryId>, delay: Duration) -> Self {
        self.per_filter
            .insert(filter.map(|c| c.as_str().to_string()), delay);
        self
    }

    fn delay_for(&self, filter: Option<&CategoryId>) -> Duration {
        let key = filter.map(|c| c.as_str().to_string());
        self.per_filter
            .get(&key)
            .copied()
            .unwrap_or(self.default_delay)
    }
}

#[async_trait]
impl PostReadStore for DelayedPostStore {
    async fn find_by_id(&self, id: &PostId) -> DomainResult<Option<Post>> {
        self.inner.find_by_id(id).await
    }

    async fn list_page(
        &self,
        filter: Option<&CategoryId>,
        order: PostOrder,
        limit: u32,
        after: Option<&PageCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PageCursor>)> {
        tokio::time::sleep(self.delay_for(filter)).await;
        self.inner.list_page(filter, order, limit, after).await
    }

    async fn find_title_between(
        &self,
        lower: &str,
        upper: &str,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        tokio::time::sleep(self.default_delay).await;
        self.inner.find_title_between(lower, upper, limit).await
    }

    async fn find_by_tag(&self, tag: &str, limit: Option<u32>) -> DomainResult<Vec<Post>> {
        tokio::time::sleep(self.default_delay).await;
        self.inner.find_by_tag(tag, limit).await
    }
}
