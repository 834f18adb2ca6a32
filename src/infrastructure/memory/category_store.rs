use crate::domain::category::{Category, CategoryId, CategoryStore};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Reference-data stand-in for the categories collection.
#[derive(Default)]
pub struct MemoryCategoryStore {
    inner: RwLock<HashMap<String, Category>>,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, category: Category) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(category.id.as_str().to_string(), category);
    }

    pub fn remove(&self, id: &CategoryId) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id.as_str());
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.as_str().cmp(b.id.as_str())));
        Ok(categories)
    }

    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>> {
        Ok(self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id.as_str())
            .cloned())
    }
}
