use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Opaque, store-assigned article identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// Ordered tag list. Duplicates and order are kept exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleTags(Vec<String>);

impl ArticleTags {
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Builds tags from a wire list, where individual entries may be null.
    pub fn from_nullable(tags: Vec<Option<String>>) -> DomainResult<Self> {
        tags.into_iter()
            .map(|tag| tag.ok_or_else(|| DomainError::Validation("tags cannot contain null".into())))
            .collect::<DomainResult<Vec<_>>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ArticleTags {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}
