use crate::application::ports::media::MediaStore;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// Media-host stand-in: keeps uploads in memory and hands back a unique URL
/// the way the real host returns a durable one.
pub struct MemoryMediaStore {
    base_url: String,
    uploads: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryMediaStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            uploads: RwLock::new(HashMap::new()),
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for MemoryMediaStore {
    fn default() -> Self {
        Self::new("memory://media")
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> DomainResult<String> {
        let url = format!("{}/{}/{file_name}", self.base_url, Uuid::new_v4());
        self.uploads
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.clone(), bytes);
        Ok(url)
    }
}
