// src/infrastructure/session.rs
use crate::application::dto::Session;
use crate::application::ports::identity::SessionStore;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Persists the session as a JSON file. A missing file is simply "no
/// session"; a corrupt one is reported as a persistence failure so the host
/// can fall back to logged-out.
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn load(&self) -> DomainResult<Option<Session>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(DomainError::Persistence(format!(
                    "cannot read session file: {err}"
                )));
            }
        };
        let session = serde_json::from_str(&raw)
            .map_err(|err| DomainError::Persistence(format!("corrupt session file: {err}")))?;
        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> DomainResult<()> {
        let raw = serde_json::to_string_pretty(session)
            .map_err(|err| DomainError::Persistence(err.to_string()))?;
        std::fs::write(&self.path, raw)
            .map_err(|err| DomainError::Persistence(format!("cannot write session file: {err}")))
    }

    async fn clear(&self) -> DomainResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(DomainError::Persistence(format!(
                "cannot remove session file: {err}"
            ))),
        }
    }
}
