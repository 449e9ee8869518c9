// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use scribe_core::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use scribe_core::domain::errors::{DomainError, DomainResult};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const STORE_DOWN: &str = "connection refused";

/// Store whose every call fails as if the database were unreachable.
/// Counts calls so tests can check that rejected input never reached it.
#[derive(Default)]
pub struct FailingArticleStore {
    calls: AtomicUsize,
}

impl FailingArticleStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> DomainResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence(STORE_DOWN.into()))
    }
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleStore {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        self.fail()
    }

    async fn update_by_id(&self, _patch: ArticlePatch) -> DomainResult<Option<Article>> {
        self.fail()
    }

    async fn remove_by_id(&self, _id: &ArticleId) -> DomainResult<Option<ArticleId>> {
        self.fail()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleStore {
    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        self.fail()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        self.fail()
    }
}
