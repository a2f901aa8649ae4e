// src/presentation/http/controllers/comments.rs
use crate::application::{dto::CommentDto, queries::comments::ListCommentsQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{extract::Path, Extension, Json};

pub async fn list_for_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .comments_for_article(ListCommentsQuery { article_id })
        .await
        .into_http()
        .map(Json)
}
