// tests/support/helpers.rs
use async_graphql::{Request, Variables};
use scribe_core::application::services::ApplicationServices;
use scribe_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use scribe_core::infrastructure::repositories::InMemoryArticleRepository;
use scribe_core::presentation::graphql::{ArticleSchema, build_schema};
use scribe_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::{Value, json};
use std::sync::Arc;

pub const ARTICLE_FIELDS: &str = "id author title content tags excerpt published";

pub fn services_with<R>(store: Arc<R>) -> Arc<ApplicationServices>
where
    R: ArticleReadRepository + ArticleWriteRepository + 'static,
{
    let write: Arc<dyn ArticleWriteRepository> = store.clone();
    let read: Arc<dyn ArticleReadRepository> = store;
    Arc::new(ApplicationServices::new(write, read))
}

pub fn memory_services() -> Arc<ApplicationServices> {
    services_with(Arc::new(InMemoryArticleRepository::new()))
}

pub fn memory_schema() -> ArticleSchema {
    build_schema(memory_services())
}

pub fn make_test_router() -> axum::Router {
    let state = HttpState::new(memory_services());
    build_router(state, &["http://localhost:3000".to_string()])
}

/// Executes a GraphQL document and returns the full response as JSON:
/// `{ "data": ..., "errors": [...] }`.
pub async fn execute(schema: &ArticleSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).expect("response serializes")
}

/// Executes a document that must succeed and returns its `data`.
pub async fn data(schema: &ArticleSchema, query: &str, variables: Value) -> Value {
    let response = execute(schema, query, variables).await;
    assert!(
        response.get("errors").is_none(),
        "unexpected errors: {response}"
    );
    response["data"].clone()
}

/// The `extensions.code` values of every error in a response.
pub fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["extensions"]["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub async fn add_article(schema: &ArticleSchema, input: Value) -> Value {
    let query = format!(
        "mutation Add($article: AddArticleInput!) {{ addArticle(article: $article) {{ {ARTICLE_FIELDS} }} }}"
    );
    data(schema, &query, json!({ "article": input })).await["addArticle"].clone()
}

pub async fn update_article(schema: &ArticleSchema, input: Value) -> Value {
    let query = format!(
        "mutation Update($article: UpdateArticleInput!) {{ updateArticle(article: $article) {{ {ARTICLE_FIELDS} }} }}"
    );
    data(schema, &query, json!({ "article": input })).await["updateArticle"].clone()
}

pub async fn delete_article(schema: &ArticleSchema, id: &str) -> Value {
    let query = "mutation Delete($article: DeleteArticleInput!) { deleteArticle(article: $article) }";
    data(schema, query, json!({ "article": { "id": id } })).await["deleteArticle"].clone()
}

pub async fn get_article(schema: &ArticleSchema, id: &str) -> Value {
    let query = format!("query Get($id: String!) {{ article(id: $id) {{ {ARTICLE_FIELDS} }} }}");
    data(schema, &query, json!({ "id": id })).await["article"].clone()
}

pub async fn list_articles(schema: &ArticleSchema) -> Vec<Value> {
    let query = format!("{{ articles {{ {ARTICLE_FIELDS} }} }}");
    data(schema, &query, json!({})).await["articles"]
        .as_array()
        .cloned()
        .expect("articles is a list")
}
