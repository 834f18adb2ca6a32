// src/application/queries/categories.rs
use crate::application::dto::CategoryDto;
use crate::application::error::ApplicationResult;
use crate::domain::category::{CategoryId, CategoryStore};
use std::sync::Arc;

/// Category resolution for filter chips, featured shortcuts, and the
/// denormalized display data on posts.
pub struct CategoryQueryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryQueryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// All categories, name ascending.
    pub async fn list_all(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.store.list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// The first `limit` categories, used as featured shortcuts.
    pub async fn featured(&self, limit: usize) -> ApplicationResult<Vec<CategoryDto>> {
        let mut categories = self.list_all().await?;
        categories.truncate(limit);
        Ok(categories)
    }

    /// Filter chip options. The implicit "All" chip is the caller's `None`
    /// filter and is not materialized here.
    pub async fn filter_options(&self, limit: usize) -> ApplicationResult<Vec<CategoryDto>> {
        let mut categories = self.list_all().await?;
        categories.truncate(limit);
        Ok(categories)
    }

    /// `Ok(None)` when the id no longer resolves; callers fall back to the
    /// post's own cover or a placeholder.
    pub async fn find_by_id(&self, id: &CategoryId) -> ApplicationResult<Option<CategoryDto>> {
        let category = self.store.find_by_id(id).await?;
        Ok(category.map(Into::into))
    }
}
