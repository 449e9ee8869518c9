use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

#[derive(Debug, Default)]
pub struct ListArticlesQuery;

impl ArticleQueryService {
    #[tracing::instrument(skip_all)]
    pub async fn list_articles(&self, _query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.find_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
