// src/application/ports/media.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// External media host: takes file bytes, returns a durable public URL.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> DomainResult<String>;
}
