use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::cursor::PageCursor;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrderField {
    CreatedAt,
    UpdatedAt,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOrder {
    pub field: PostOrderField,
    pub direction: OrderDirection,
}

impl PostOrder {
    /// The listing default: newest first.
    pub const fn newest_first() -> Self {
        Self {
            field: PostOrderField::CreatedAt,
            direction: OrderDirection::Desc,
        }
    }

    pub const fn title_ascending() -> Self {
        Self {
            field: PostOrderField::Title,
            direction: OrderDirection::Asc,
        }
    }
}

/// Read side of the document-store gateway. The contract mirrors what the
/// managed store actually supports: one equality or range filter, one
/// ordering, a limit, and strictly-after cursor resumption.
#[async_trait]
pub trait PostReadStore: Send + Sync {
    async fn find_by_id(&self, id: &PostId) -> DomainResult<Option<Post>>;

    /// One page of posts, optionally filtered by category, resuming strictly
    /// after `after` when given. The returned cursor anchors the last item
    /// of the page; `None` means the page consumed the tail of the result
    /// set.
    async fn list_page(
        &self,
        filter: Option<&CategoryId>,
        order: PostOrder,
        limit: u32,
        after: Option<&PageCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PageCursor>)>;

    /// Posts whose title falls lexicographically within `[lower, upper]`,
    /// ordered by title ascending. Approximates prefix matching in a store
    /// that only speaks range comparisons.
    async fn find_title_between(
        &self,
        lower: &str,
        upper: &str,
        limit: u32,
    ) -> DomainResult<Vec<Post>>;

    /// Posts whose tag set contains `tag` verbatim (case-sensitive, whole
    /// string), newest first.
    async fn find_by_tag(&self, tag: &str, limit: Option<u32>) -> DomainResult<Vec<Post>>;
}

#[async_trait]
pub trait PostWriteStore: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn patch(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: &PostId) -> DomainResult<()>;
}
