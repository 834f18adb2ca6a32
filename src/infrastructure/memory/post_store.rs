use crate::application::ports::time::Clock;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, OrderDirection, PageCursor, Post, PostId, PostOrder, PostOrderField, PostUpdate,
    PostReadStore, PostWriteStore,
};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Document-store stand-in for the posts collection. Ids and timestamps are
/// assigned here, on the "server" side, like the managed backend does.
pub struct MemoryPostStore {
    clock: Arc<dyn Clock>,
    inner: RwLock<HashMap<String, Post>>,
}

impl MemoryPostStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Post>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Post>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Total order for a given listing: the requested field first, then the
    /// document id, so cursor resumption is deterministic even across equal
    /// sort keys.
    fn compare(a: &Post, b: &Post, order: PostOrder) -> Ordering {
        let ordering = match order.field {
            PostOrderField::CreatedAt => a.created_at.cmp(&b.created_at),
            PostOrderField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            PostOrderField::Title => a.title.as_str().cmp(b.title.as_str()),
        }
        .then_with(|| a.id.as_str().cmp(b.id.as_str()));
        match order.direction {
            OrderDirection::Asc => ordering,
            OrderDirection::Desc => ordering.reverse(),
        }
    }
}

#[async_trait]
impl PostReadStore for MemoryPostStore {
    async fn find_by_id(&self, id: &PostId) -> DomainResult<Option<Post>> {
        Ok(self.read().get(id.as_str()).cloned())
    }

    async fn list_page(
        &self,
        filter: Option<&CategoryId>,
        order: PostOrder,
        limit: u32,
        after: Option<&PageCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PageCursor>)> {
        let guard = self.read();
        let mut posts: Vec<Post> = guard
            .values()
            .filter(|post| filter.is_none_or(|category| post.category.id == *category))
            .cloned()
            .collect();
        posts.sort_by(|a, b| Self::compare(a, b, order));

        let start = match after {
            None => 0,
            Some(cursor) => {
                let anchor_id = cursor.post_id()?;
                let anchor = guard.get(anchor_id.as_str()).ok_or_else(|| {
                    DomainError::Validation("cursor references a missing document".into())
                })?;
                // Strictly after the anchor's position in this ordering.
                posts.partition_point(|post| {
                    Self::compare(post, anchor, order) != Ordering::Greater
                })
            }
        };
        drop(guard);

        let total = posts.len();
        let page: Vec<Post> = posts.into_iter().skip(start).take(limit as usize).collect();
        // The store knows when a page consumed the tail and signals it with a
        // missing cursor, independent of the page being full or short.
        let cursor = if start + page.len() < total {
            page.last().map(|post| PageCursor::after_post(&post.id))
        } else {
            None
        };
        Ok((page, cursor))
    }

    async fn find_title_between(
        &self,
        lower: &str,
        upper: &str,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .read()
            .values()
            .filter(|post| post.title.as_str() >= lower && post.title.as_str() <= upper)
            .cloned()
            .collect();
        posts.sort_by(|a, b| Self::compare(a, b, PostOrder::title_ascending()));
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_by_tag(&self, tag: &str, limit: Option<u32>) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .read()
            .values()
            .filter(|post| post.tags.contains(tag))
            .cloned()
            .collect();
        posts.sort_by(|a, b| Self::compare(a, b, PostOrder::newest_first()));
        if let Some(limit) = limit {
            posts.truncate(limit as usize);
        }
        Ok(posts)
    }
}

#[async_trait]
impl PostWriteStore for MemoryPostStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let now = self.clock.now();
        let id = PostId::new(Uuid::new_v4().to_string())?;
        let post = Post {
            id: id.clone(),
            title: post.title,
            category: post.category,
            description: post.description,
            content: post.content,
            tags: post.tags,
            cover_image: post.cover_image,
            author_id: post.author_id,
            author_name: post.author_name,
            created_at: now,
            updated_at: now,
        };
        self.write().insert(id.as_str().to_string(), post.clone());
        Ok(post)
    }

    async fn patch(&self, update: PostUpdate) -> DomainResult<Post> {
        let now = self.clock.now();
        let mut guard = self.write();
        let post = guard
            .get_mut(update.id.as_str())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(category) = update.category {
            post.category = category;
        }
        if let Some(description) = update.description {
            post.description = description;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(tags) = update.tags {
            post.tags = tags;
        }
        if let Some(cover_image) = update.cover_image {
            post.cover_image = cover_image;
        }
        // created_at <= updated_at must hold even under clock skew.
        post.updated_at = now.max(post.created_at);

        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> DomainResult<()> {
        self.write()
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}
