// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTags};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: ArticleTags,
    pub excerpt: String,
    pub published: bool,
}

impl Article {
    pub fn from_new(id: ArticleId, article: NewArticle) -> Self {
        let NewArticle {
            author,
            title,
            content,
            tags,
            excerpt,
            published,
        } = article;

        Self {
            id,
            author,
            title,
            content,
            tags,
            excerpt,
            published,
        }
    }

    /// Overwrites every field the patch carries. The excerpt is always replaced.
    pub fn apply(&mut self, patch: ArticlePatch) {
        let ArticlePatch {
            id: _,
            author,
            title,
            content,
            tags,
            published,
            excerpt,
        } = patch;

        if let Some(author) = author {
            self.author = author;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(published) = published {
            self.published = published;
        }
        self.excerpt = excerpt;
    }
}

/// A record ready to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: ArticleTags,
    pub excerpt: String,
    pub published: bool,
}

/// Field-wise overwrite of a stored article.
///
/// The outer `Option` tells whether the field was supplied at all; for the
/// free-text fields the inner `Option` distinguishes "set to a value" from
/// "cleared".
#[derive(Debug, Clone)]
pub struct ArticlePatch {
    pub id: ArticleId,
    pub author: Option<Option<String>>,
    pub title: Option<Option<String>>,
    pub content: Option<Option<String>>,
    pub tags: Option<ArticleTags>,
    pub published: Option<bool>,
    pub excerpt: String,
}

impl ArticlePatch {
    pub fn new(id: ArticleId, excerpt: impl Into<String>) -> Self {
        Self {
            id,
            author: None,
            title: None,
            content: None,
            tags: None,
            published: None,
            excerpt: excerpt.into(),
        }
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_tags(mut self, tags: ArticleTags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article::from_new(
            ArticleId::new("a1").unwrap(),
            NewArticle {
                author: Some("ann".into()),
                title: Some("title".into()),
                content: Some("body".into()),
                tags: ArticleTags::new(vec!["x".into()]),
                excerpt: "body".into(),
                published: false,
            },
        )
    }

    #[test]
    fn apply_overwrites_supplied_fields_only() {
        let mut article = sample_article();
        let patch = ArticlePatch::new(article.id.clone(), "")
            .with_title(Some("new title".into()))
            .with_published(true);
        article.apply(patch);

        assert_eq!(article.title.as_deref(), Some("new title"));
        assert_eq!(article.author.as_deref(), Some("ann"));
        assert_eq!(article.content.as_deref(), Some("body"));
        assert_eq!(article.tags.as_slice(), ["x"]);
        assert!(article.published);
        assert_eq!(article.excerpt, "");
    }

    #[test]
    fn apply_clears_field_and_tags() {
        let mut article = sample_article();
        let patch = ArticlePatch::new(article.id.clone(), "body")
            .with_author(None)
            .with_tags(ArticleTags::default());
        article.apply(patch);

        assert!(article.author.is_none());
        assert!(article.tags.is_empty());
    }
}
