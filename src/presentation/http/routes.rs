// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, comments};
use crate::presentation::http::state::HttpState;
use axum::{
    http::Method,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/articles", get(articles::index))
        .route("/articles/create", post(articles::create))
        .route("/articles/update", post(articles::update))
        .route("/articles/{id}", get(articles::show))
        .route("/articles/{id}/delete", get(articles::delete))
        .route(
            "/api/articles/{article_id}/comments",
            get(comments::list_for_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
