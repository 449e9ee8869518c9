use crate::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local article store. Records are kept in insertion order.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let created = Article::from_new(ArticleId::generate(), article);
        self.articles.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_by_id(&self, patch: ArticlePatch) -> DomainResult<Option<Article>> {
        let mut articles = self.articles.write().await;
        let Some(article) = articles.iter_mut().find(|a| a.id == patch.id) else {
            return Ok(None);
        };
        article.apply(patch);
        Ok(Some(article.clone()))
    }

    async fn remove_by_id(&self, id: &ArticleId) -> DomainResult<Option<ArticleId>> {
        let mut articles = self.articles.write().await;
        let Some(index) = articles.iter().position(|a| &a.id == id) else {
            return Ok(None);
        };
        Ok(Some(articles.remove(index).id))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|a| &a.id == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }
}
