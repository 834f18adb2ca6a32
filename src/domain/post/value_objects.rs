use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Store-assigned document id. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("post id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostId> for String {
    fn from(value: PostId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostTitle> for String {
    fn from(value: PostTitle) -> Self {
        value.0
    }
}

/// Tags in insertion order, case-sensitive. Only exact duplicates are
/// collapsed; whitespace-only entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for value in values {
            let value = value.into().trim().to_string();
            if !value.is_empty() && !tags.contains(&value) {
                tags.push(value);
            }
        }
        Self(tags)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<TagList> for Vec<String> {
    fn from(value: TagList) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_list_keeps_insertion_order_and_drops_exact_duplicates() {
        let tags = TagList::new(["rust", "Rust", "rust", "  ", "tokio"]);
        assert_eq!(tags.as_slice(), ["rust", "Rust", "tokio"]);
    }

    #[test]
    fn tag_list_trims_entries() {
        let tags = TagList::new(["  async  "]);
        assert!(tags.contains("async"));
        assert!(!tags.contains("Async"));
    }

    #[test]
    fn empty_title_is_rejected() {
        assert!(PostTitle::new("   ").is_err());
    }
}
