// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleReadRepository, ArticleTags, ArticleWriteRepository,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, author, title, content, tags, excerpt, published";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    author: Option<String>,
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    excerpt: String,
    published: bool,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author: row.author,
            title: row.title,
            content: row.content,
            tags: ArticleTags::new(row.tags),
            excerpt: row.excerpt,
            published: row.published,
        })
    }
}

impl PostgresArticleRepository {
    /// `UPDATE ... RETURNING` for a patch. The excerpt is always written;
    /// other columns only when the patch carries them.
    fn update_query(patch: &ArticlePatch) -> QueryBuilder<'_, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
        Self::push_patch(&mut builder, patch);
        builder.push(" WHERE id = ");
        builder.push_bind(patch.id.as_str());
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);
        builder
    }

    fn push_patch<'a>(builder: &mut QueryBuilder<'a, Postgres>, patch: &'a ArticlePatch) {
        builder.push("excerpt = ");
        builder.push_bind(patch.excerpt.as_str());

        if let Some(author) = &patch.author {
            builder.push(", author = ");
            builder.push_bind(author.as_deref());
        }
        if let Some(title) = &patch.title {
            builder.push(", title = ");
            builder.push_bind(title.as_deref());
        }
        if let Some(content) = &patch.content {
            builder.push(", content = ");
            builder.push_bind(content.as_deref());
        }
        if let Some(tags) = &patch.tags {
            builder.push(", tags = ");
            builder.push_bind(tags.as_slice().to_vec());
        }
        if let Some(published) = patch.published {
            builder.push(", published = ");
            builder.push_bind(published);
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author,
            title,
            content,
            tags,
            excerpt,
            published,
        } = article;
        let id = ArticleId::generate();

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (id, author, title, content, tags, excerpt, published)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, author, title, content, tags, excerpt, published",
        )
        .bind(id.as_str())
        .bind(author)
        .bind(title)
        .bind(content)
        .bind(tags.into_inner())
        .bind(excerpt)
        .bind(published)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update_by_id(&self, patch: ArticlePatch) -> DomainResult<Option<Article>> {
        let mut builder = Self::update_query(&patch);
        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn remove_by_id(&self, id: &ArticleId) -> DomainResult<Option<ArticleId>> {
        let removed = sqlx::query_scalar::<_, String>("DELETE FROM articles WHERE id = $1 RETURNING id")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        removed.map(ArticleId::new).transpose()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, author, title, content, tags, excerpt, published
             FROM articles WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, author, title, content, tags, excerpt, published
             FROM articles ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
