#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use axum::Router;
use pressroom::application::dto::CommentDto;
use pressroom::application::services::ApplicationServices;
use pressroom::presentation::http::{routes::build_router, state::HttpState};

use mocks::{InMemoryArticleRepo, StaticCommentClient};

/// Router over an empty in-memory store with a few canned comments for
/// article 1, enough for the HTTP-level tests.
pub fn make_test_router() -> Router {
    let repo = Arc::new(InMemoryArticleRepo::new());
    let comments = Arc::new(StaticCommentClient::new(vec![
        CommentDto {
            id: 10,
            article_id: 1,
            nickname: "Park".into(),
            body: "first!".into(),
        },
        CommentDto {
            id: 11,
            article_id: 1,
            nickname: "Kim".into(),
            body: "good read".into(),
        },
    ]));

    let services = Arc::new(ApplicationServices::new(repo, comments));
    build_router(HttpState { services })
}
