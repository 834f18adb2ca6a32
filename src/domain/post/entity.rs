// src/domain/post/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{PostId, PostTitle, TagList};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Category reference captured on a post: the id plus the display name as it
/// was at capture time. The name is a historical snapshot and is not kept in
/// sync with later category renames.
#[derive(Debug, Clone)]
pub struct CategorySnapshot {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub category: CategorySnapshot,
    pub description: Option<String>,
    pub content: String,
    pub tags: TagList,
    pub cover_image: Option<String>,
    pub author_id: UserId,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        self.author_id == *user
    }
}

/// Everything the store needs to mint a post. Id and timestamps are assigned
/// server-side on insert.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub category: CategorySnapshot,
    pub description: Option<String>,
    pub content: String,
    pub tags: TagList,
    pub cover_image: Option<String>,
    pub author_id: UserId,
    pub author_name: Option<String>,
}

/// Partial update. Author and creation time are immutable; the store bumps
/// `updated_at` on every patch.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub category: Option<CategorySnapshot>,
    pub description: Option<Option<String>>,
    pub content: Option<String>,
    pub tags: Option<TagList>,
    pub cover_image: Option<Option<String>>,
}

impl PostUpdate {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            title: None,
            category: None,
            description: None,
            content: None,
            tags: None,
            cover_image: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CategorySnapshot) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: TagList) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn with_cover_image(mut self, cover_image: Option<String>) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.cover_image.is_none()
    }
}
