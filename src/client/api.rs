use super::error::ClientError;
use crate::application::dto::ArticleDto;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const ARTICLES_QUERY: &str =
    "query { articles { id author content excerpt published tags title } }";

/// Remote article operations used by client sagas.
#[async_trait]
pub trait ArticlesApi: Send + Sync {
    async fn fetch_articles(&self) -> Result<Vec<ArticleDto>, ClientError>;
}

/// [`ArticlesApi`] over the GraphQL HTTP endpoint.
pub struct GraphqlArticlesClient {
    client: Client,
    endpoint: String,
}

impl GraphqlArticlesClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ArticlesData {
    articles: Option<Vec<Option<ArticleDto>>>,
}

#[async_trait]
impl ArticlesApi for GraphqlArticlesClient {
    async fn fetch_articles(&self) -> Result<Vec<ArticleDto>, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": ARTICLES_QUERY }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: GraphqlResponse<ArticlesData> = serde_json::from_slice(&response.bytes().await?)?;
        if !body.errors.is_empty() {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(ClientError::Graphql(messages.join("; ")));
        }

        Ok(body
            .data
            .and_then(|data| data.articles)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect())
    }
}
