// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, service::lookup_id};
use crate::application::error::ApplicationResult;

#[derive(Debug, Clone, Default)]
pub struct DeleteArticleCommand {
    pub id: Option<String>,
}

impl ArticleCommandService {
    #[tracing::instrument(skip_all, fields(article_id = ?command.id))]
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<Option<String>> {
        let Some(id) = lookup_id(command.id) else {
            return Ok(None);
        };
        let removed = self.write_repo.remove_by_id(&id).await?;
        Ok(removed.map(String::from))
    }
}
