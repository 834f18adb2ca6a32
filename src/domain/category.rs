// src/domain/category.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "category id cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

/// Static reference data: a topical grouping. The image URL doubles as the
/// fallback cover for posts without one of their own.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, ordered by name ascending.
    async fn list_all(&self) -> DomainResult<Vec<Category>>;

    /// Absence is a valid outcome (a post's category may have been deleted
    /// after the post was created), never an error.
    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>>;
}
