use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::PostId;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Opaque resumption token marking a position in an ordered result page.
///
/// Callers cannot construct one; the only way to obtain a cursor is to take
/// it from a previously returned page, which keeps resumption anchored to a
/// document the store actually handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    pub(crate) fn after_post(id: &PostId) -> Self {
        Self(URL_SAFE_NO_PAD.encode(id.as_str().as_bytes()))
    }

    pub(crate) fn post_id(&self) -> DomainResult<PostId> {
        let bytes = URL_SAFE_NO_PAD
            .decode(&self.0)
            .map_err(|_| DomainError::Validation("invalid cursor token".into()))?;
        let raw = String::from_utf8(bytes)
            .map_err(|_| DomainError::Validation("invalid cursor token".into()))?;
        PostId::new(raw)
    }

    pub fn as_token(&self) -> &str {
        &self.0
    }
}
