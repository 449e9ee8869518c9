// tests/e2e_http.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

async fn post_graphql(app: &axum::Router, payload: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| panic!("non-json body: {}", String::from_utf8_lossy(&bytes)));
    (status, json)
}

#[tokio::test]
async fn health_returns_ok_json() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let bytes = body::to_bytes(resp.into_body(), 1024).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, json!({ "status": "ok" }));

    let direct = scribe_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn graphql_endpoint_creates_and_reads_articles() {
    let app = support::make_test_router();

    let (status, created) = post_graphql(
        &app,
        json!({
            "query": "mutation($article: AddArticleInput!) { addArticle(article: $article) { id title excerpt published } }",
            "variables": { "article": { "title": "T", "content": "hello world" } },
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let article = &created["data"]["addArticle"];
    assert_eq!(article["excerpt"], json!("hello world"));
    assert_eq!(article["published"], json!(false));
    let id = article["id"].as_str().unwrap().to_string();

    let (status, listed) = post_graphql(&app, json!({ "query": "{ articles { id title } }" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed["data"]["articles"],
        json!([{ "id": id, "title": "T" }])
    );
}

#[tokio::test]
async fn graphql_endpoint_reports_validation_errors_in_body() {
    let app = support::make_test_router();

    let (status, body) = post_graphql(
        &app,
        json!({ "query": "mutation { addArticle(article: { tags: null }) { id } }" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(support::error_codes(&body), ["BAD_USER_INPUT"]);
}

#[tokio::test]
async fn graphiql_is_served_on_get() {
    let app = support::make_test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("text/html"), "unexpected content-type: {ct}");
}
