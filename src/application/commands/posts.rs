// src/application/commands/posts.rs
use crate::application::dto::{PostDto, Session};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::media::MediaStore;
use crate::domain::category::{CategoryId, CategoryStore};
use crate::domain::post::{
    CategorySnapshot, NewPost, Post, PostId, PostReadStore, PostTitle, PostUpdate, PostWriteStore,
    TagList,
};
use crate::domain::user::UserId;
use std::sync::Arc;

pub struct CreatePostCommand {
    pub title: String,
    pub category_id: String,
    pub description: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
}

pub struct UpdatePostCommand {
    pub id: String,
    pub title: Option<String>,
    pub category_id: Option<String>,
    pub description: Option<Option<String>>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<Option<String>>,
}

pub struct DeletePostCommand {
    pub id: String,
}

/// Authoring flows. Mutation is gated to the original author here, at the
/// application layer; the store itself does not enforce ownership.
pub struct PostCommandService {
    write_store: Arc<dyn PostWriteStore>,
    read_store: Arc<dyn PostReadStore>,
    categories: Arc<dyn CategoryStore>,
    media: Arc<dyn MediaStore>,
}

impl PostCommandService {
    pub fn new(
        write_store: Arc<dyn PostWriteStore>,
        read_store: Arc<dyn PostReadStore>,
        categories: Arc<dyn CategoryStore>,
        media: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            write_store,
            read_store,
            categories,
            media,
        }
    }

    pub async fn create_post(
        &self,
        actor: &Session,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let author_id = UserId::new(actor.user_id.clone())?;
        let title = PostTitle::new(command.title)?;
        if command.content.trim().is_empty() {
            return Err(ApplicationError::validation("content cannot be empty"));
        }

        // Advisory referential check: the store has no foreign keys, so the
        // category must resolve now and its name is snapshotted onto the
        // post. The snapshot is never refreshed on later renames.
        let category = self.resolve_category(command.category_id).await?;

        let new_post = NewPost {
            title,
            category,
            description: normalize_optional(command.description),
            content: command.content,
            tags: TagList::new(command.tags),
            cover_image: normalize_optional(command.cover_image),
            author_id,
            author_name: actor.display_name.clone(),
        };

        let created = self.write_store.insert(new_post).await?;
        tracing::debug!(id = %created.id, "post created");
        Ok(created.into())
    }

    pub async fn update_post(
        &self,
        actor: &Session,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let post = self.owned_post(actor, &id).await?;

        let mut update = PostUpdate::new(post.id.clone());
        if let Some(title) = command.title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(category_id) = command.category_id {
            update = update.with_category(self.resolve_category(category_id).await?);
        }
        if let Some(description) = command.description {
            update = update.with_description(normalize_optional(description));
        }
        if let Some(content) = command.content {
            if content.trim().is_empty() {
                return Err(ApplicationError::validation("content cannot be empty"));
            }
            update = update.with_content(content);
        }
        if let Some(tags) = command.tags {
            update = update.with_tags(TagList::new(tags));
        }
        if let Some(cover_image) = command.cover_image {
            update = update.with_cover_image(normalize_optional(cover_image));
        }

        if update.is_noop() {
            return Ok(post.into());
        }

        let updated = self.write_store.patch(update).await?;
        Ok(updated.into())
    }

    /// Permanent and immediate; there is no soft delete.
    pub async fn delete_post(
        &self,
        actor: &Session,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        self.owned_post(actor, &id).await?;
        self.write_store.delete(&id).await?;
        tracing::debug!(id = %id, "post deleted");
        Ok(())
    }

    /// Pushes cover bytes to the media host and returns the durable URL to
    /// put on the post. Runs before `create_post` in the authoring flow.
    pub async fn upload_cover(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApplicationResult<String> {
        if bytes.is_empty() {
            return Err(ApplicationError::validation("cover file is empty"));
        }
        Ok(self.media.upload(file_name, bytes).await?)
    }

    async fn owned_post(&self, actor: &Session, id: &PostId) -> ApplicationResult<Post> {
        let author = UserId::new(actor.user_id.clone())?;
        let post = self
            .read_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        if !post.is_authored_by(&author) {
            return Err(ApplicationError::forbidden(
                "only the original author can modify a post",
            ));
        }
        Ok(post)
    }

    async fn resolve_category(
        &self,
        category_id: String,
    ) -> ApplicationResult<CategorySnapshot> {
        let id = CategoryId::new(category_id)?;
        let category = self
            .categories
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(CategorySnapshot {
            id: category.id,
            name: category.name,
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
