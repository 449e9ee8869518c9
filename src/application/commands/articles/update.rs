use super::{
    ArticleCommandService, FieldInput,
    service::{lookup_id, tags_from_input},
};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticlePatch, derive_excerpt},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: Option<String>,
    pub author: FieldInput<String>,
    pub title: FieldInput<String>,
    pub content: FieldInput<String>,
    pub published: FieldInput<bool>,
    pub tags: FieldInput<Vec<Option<String>>>,
}

impl UpdateArticleCommand {
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl ArticleCommandService {
    /// Applies the supplied fields and returns the stored record afterwards,
    /// or `None` when the id is missing, blank or unknown.
    ///
    /// The excerpt is derived from the update input alone: an update that
    /// omits `content` stores an empty excerpt.
    #[tracing::instrument(skip_all, fields(article_id = ?command.id))]
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let UpdateArticleCommand {
            id,
            author,
            title,
            content,
            published,
            tags,
        } = command;

        let tags = tags_from_input(tags)?;
        let published = published.into_required_patch("published")?;
        let Some(id) = lookup_id(id) else {
            tracing::debug!("update without a usable id");
            return Ok(None);
        };
        let excerpt = derive_excerpt(content.as_ref().value().map(String::as_str));

        let mut patch = ArticlePatch::new(id, excerpt);
        if let Some(author) = author.into_patch() {
            patch = patch.with_author(author);
        }
        if let Some(title) = title.into_patch() {
            patch = patch.with_title(title);
        }
        if let Some(content) = content.into_patch() {
            patch = patch.with_content(content);
        }
        if let Some(tags) = tags {
            patch = patch.with_tags(tags);
        }
        if let Some(published) = published {
            patch = patch.with_published(published);
        }

        let updated = self.write_repo.update_by_id(patch).await?;
        if updated.is_none() {
            tracing::debug!("update target not found");
        }
        Ok(updated.map(Into::into))
    }
}
