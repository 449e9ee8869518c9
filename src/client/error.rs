use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("graphql error: {0}")]
    Graphql(String),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
