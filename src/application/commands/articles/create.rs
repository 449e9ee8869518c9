// src/application/commands/articles/create.rs
use super::{ArticleCommandService, FieldInput, service::tags_from_input};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{NewArticle, derive_excerpt},
};

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: FieldInput<Vec<Option<String>>>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    command: CreateArticleCommand,
}

impl CreateArticleCommandBuilder {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.command.author = Some(author.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.command.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.command.content = Some(content.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command.tags = FieldInput::Value(tags.into_iter().map(|t| Some(t.into())).collect());
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        self.command
    }
}

impl ArticleCommandService {
    #[tracing::instrument(skip_all)]
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            author,
            title,
            content,
            tags,
        } = command;

        let tags = tags_from_input(tags)?.unwrap_or_default();
        let excerpt = derive_excerpt(content.as_deref());

        let new_article = NewArticle {
            author,
            title,
            content,
            tags,
            excerpt,
            published: false,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::debug!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
