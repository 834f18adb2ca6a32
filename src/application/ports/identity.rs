// src/application/ports/identity.rs
use crate::application::dto::Session;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Explicit load/save boundary for the persisted session. Called once at
/// process start and whenever the identity changes; everything in between
/// passes the `Session` around by value.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> DomainResult<Option<Session>>;
    async fn save(&self, session: &Session) -> DomainResult<()>;
    async fn clear(&self) -> DomainResult<()>;
}
