use crate::application::dto::categories::CategoryDto;
use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub category_id: String,
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub author_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    /// Cover to render: the post's own image, else the category's fallback
    /// image when the category still resolves.
    pub fn display_cover<'a>(&'a self, category: Option<&'a CategoryDto>) -> Option<&'a str> {
        self.cover_image
            .as_deref()
            .or_else(|| category.map(|c| c.image.as_str()))
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            category_id: post.category.id.into(),
            category_name: post.category.name,
            description: post.description,
            content: post.content,
            tags: post.tags.into(),
            cover_image: post.cover_image,
            author_id: post.author_id.into(),
            author_name: post.author_name,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
