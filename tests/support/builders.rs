// tests/support/builders.rs
use kawara_core::domain::category::{Category, CategoryId};
use kawara_core::domain::post::{
    CategorySnapshot, NewPost, Post, PostTitle, PostWriteStore, TagList,
};
use kawara_core::domain::user::UserId;
use kawara_core::infrastructure::memory::{MemoryCategoryStore, MemoryPostStore};
use std::sync::Arc;

use crate::support::mocks::time::SteppingClock;

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: name.into(),
        image: format!("https://img.example/{id}.png"),
    }
}

pub struct PostBuilder {
    title: String,
    category_id: String,
    category_name: String,
    description: Option<String>,
    content: String,
    tags: Vec<String>,
    cover_image: Option<String>,
    author_id: String,
    author_name: Option<String>,
}

impl PostBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category_id: "c1".into(),
            category_name: "Tech".into(),
            description: None,
            content: "<p>body</p>".into(),
            tags: Vec::new(),
            cover_image: None,
            author_id: "u1".into(),
            author_name: Some("Author One".into()),
        }
    }

    pub fn category(mut self, id: &str, name: &str) -> Self {
        self.category_id = id.into();
        self.category_name = name.into();
        self
    }

    pub fn tags<const N: usize>(mut self, tags: [&str; N]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn author(mut self, id: &str) -> Self {
        self.author_id = id.into();
        self
    }

    pub fn cover(mut self, url: &str) -> Self {
        self.cover_image = Some(url.into());
        self
    }

    pub fn build(self) -> NewPost {
        NewPost {
            title: PostTitle::new(self.title).unwrap(),
            category: CategorySnapshot {
                id: CategoryId::new(self.category_id).unwrap(),
                name: self.category_name,
            },
            description: self.description,
            content: self.content,
            tags: TagList::new(self.tags),
            cover_image: self.cover_image,
            author_id: UserId::new(self.author_id).unwrap(),
            author_name: self.author_name,
        }
    }

    /// Insert through the write port so the store assigns id + timestamps.
    pub async fn insert_into(self, store: &MemoryPostStore) -> Post {
        store.insert(self.build()).await.unwrap()
    }
}

/// A post store backed by a stepping clock: posts inserted later are newer.
pub fn fresh_post_store() -> Arc<MemoryPostStore> {
    Arc::new(MemoryPostStore::new(Arc::new(SteppingClock::new())))
}

/// Category store pre-seeded with the fixture taxonomy.
pub fn seeded_category_store() -> Arc<MemoryCategoryStore> {
    let store = MemoryCategoryStore::new();
    store.put(category("c1", "Tech"));
    store.put(category("c2", "Learn"));
    store.put(category("c3", "Tools"));
    Arc::new(store)
}
