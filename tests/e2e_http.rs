// tests/e2e_http.rs
use axum::body::{self, Body};
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

mod support;

const FORM: &str = "application/x-www-form-urlencoded";

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_request(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let encoded = serde_urlencoded::to_string(pairs).unwrap();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, FORM)
        .body(Body::from(encoded))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_test_router();

    let resp = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");
}

#[tokio::test]
async fn create_redirects_to_the_new_article() {
    let app = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(form_request(
            "/articles/create",
            &[("title", "Hello"), ("content", "World")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()["location"].to_str().unwrap().to_string();
    assert_eq!(location, "/articles/1");

    let list = app.oneshot(get_request("/articles")).await.unwrap();
    assert_eq!(list.status(), StatusCode::OK);
    let articles = json_body(list).await;
    assert_eq!(articles[0]["title"], "Hello");
    assert_eq!(articles[0]["content"], "World");
}

#[tokio::test]
async fn show_returns_article_with_its_comments() {
    let app = support::make_test_router();

    app.clone()
        .oneshot(form_request(
            "/articles/create",
            &[("title", "Hello"), ("content", "World")],
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get_request("/articles/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail = json_body(resp).await;
    assert_eq!(detail["article"]["id"], 1);
    assert_eq!(detail["article"]["title"], "Hello");
    let comments = detail["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["articleId"], 1);
    assert_eq!(comments[0]["nickname"], "Park");
}

#[tokio::test]
async fn show_on_missing_article_is_404() {
    let app = support::make_test_router();

    let resp = app.oneshot(get_request("/articles/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_patches_and_redirects_to_the_detail_page() {
    let app = support::make_test_router();

    app.clone()
        .oneshot(form_request(
            "/articles/create",
            &[("title", "T1"), ("content", "C1")],
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(form_request(
            "/articles/update",
            &[("id", "1"), ("content", "C2")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"].to_str().unwrap(), "/articles/1");

    let shown = app.oneshot(get_request("/articles/1")).await.unwrap();
    let detail = json_body(shown).await;
    assert_eq!(detail["article"]["title"], "T1");
    assert_eq!(detail["article"]["content"], "C2");
}

#[tokio::test]
async fn update_on_missing_article_is_404() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(form_request(
            "/articles/update",
            &[("id", "7"), ("title", "nope")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_redirects_back_to_the_list() {
    let app = support::make_test_router();

    app.clone()
        .oneshot(form_request(
            "/articles/create",
            &[("title", "gone"), ("content", "soon")],
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(get_request("/articles/1/delete"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"].to_str().unwrap(), "/articles");

    let shown = app.oneshot(get_request("/articles/1")).await.unwrap();
    assert_eq!(shown.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_on_missing_article_still_redirects() {
    let app = support::make_test_router();

    let resp = app.oneshot(get_request("/articles/99/delete")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn comments_api_returns_json_list() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(get_request("/api/articles/1/comments"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let comments = json_body(resp).await;
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1]["body"], "good read");
}

#[tokio::test]
async fn comments_api_is_empty_for_an_article_without_comments() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(get_request("/api/articles/2/comments"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await.as_array().unwrap().len(), 0);
}
