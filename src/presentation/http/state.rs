// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::graphql::{ArticleSchema, build_schema};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub schema: ArticleSchema,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self {
            schema: build_schema(services),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryArticleRepository;

    #[tokio::test]
    async fn schema_is_backed_by_the_given_services() {
        let repo = Arc::new(InMemoryArticleRepository::new());
        let state = HttpState::new(Arc::new(ApplicationServices::new(repo.clone(), repo)));

        let response = state.schema.execute("{ articles { id } }").await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "articles": [] })
        );
    }
}
