// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::FieldInput,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleTags, ArticleWriteRepository},
};

/// Write side of the article API.
///
/// Holds no mutable state; concurrent writes to the same id are resolved by
/// the store (last write wins). If the caller drops a request future after the
/// store call was issued, the write may still commit and nothing is rolled back.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
}

impl ArticleCommandService {
    pub fn new(write_repo: Arc<dyn ArticleWriteRepository>) -> Self {
        Self { write_repo }
    }
}

/// Resolves a client-supplied id. A missing or blank id cannot name a stored
/// record, so it resolves to `None` and the caller reports "not found".
pub(super) fn lookup_id(id: Option<String>) -> Option<ArticleId> {
    id.and_then(|id| ArticleId::new(id).ok())
}

pub(super) fn tags_from_input(
    tags: FieldInput<Vec<Option<String>>>,
) -> ApplicationResult<Option<ArticleTags>> {
    tags.into_required_patch("tags")?
        .map(ArticleTags::from_nullable)
        .transpose()
        .map_err(ApplicationError::from)
}
