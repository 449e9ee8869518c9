use crate::domain::article::entity::{Article, ArticlePatch, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Returns the post-update record, or `None` when no article has the id.
    async fn update_by_id(&self, patch: ArticlePatch) -> DomainResult<Option<Article>>;
    /// Returns the removed id, or `None` when no article has the id.
    async fn remove_by_id(&self, id: &ArticleId) -> DomainResult<Option<ArticleId>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
}
