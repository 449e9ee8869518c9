use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    /// A missing article is a normal `None`, not an error.
    #[tracing::instrument(skip_all, fields(article_id = %query.id))]
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let Ok(id) = ArticleId::new(query.id) else {
            return Ok(None);
        };
        let article = self.read_repo.find_by_id(&id).await?;
        Ok(article.map(Into::into))
    }
}
