// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, CommentDto},
    queries::{articles::GetArticleByIdQuery, comments::ListCommentsQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Form, Path},
    response::Redirect,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateArticleForm {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleForm {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Article detail plus its remotely sourced comments, as the show page
/// presents them together.
#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    pub article: ArticleDto,
    pub comments: Vec<CommentDto>,
}

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDetail>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?
        .ok_or_else(|| HttpError::not_found("article not found"))?;

    let comments = state
        .services
        .comment_queries
        .comments_for_article(ListCommentsQuery { article_id: id })
        .await
        .into_http()?;

    Ok(Json(ArticleDetail { article, comments }))
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    Form(form): Form<CreateArticleForm>,
) -> HttpResult<Redirect> {
    let created = state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            title: form.title,
            content: form.content,
        })
        .await
        .into_http()?;

    Ok(Redirect::to(&format!("/articles/{}", created.id)))
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    Form(form): Form<UpdateArticleForm>,
) -> HttpResult<Redirect> {
    // The update form addresses its target through its own id field.
    let Some(id) = form.id else {
        return Err(HttpError::not_found("article not found"));
    };

    let updated = state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            form_id: form.id,
            title: form.title,
            content: form.content,
        })
        .await
        .into_http()?;

    match updated {
        Some(article) => Ok(Redirect::to(&format!("/articles/{}", article.id))),
        None => Err(HttpError::not_found("article not found")),
    }
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Redirect> {
    let deleted = state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    if let Some(article) = deleted {
        tracing::info!(id = article.id, title = %article.title, "article removed");
    }

    // Back to the list either way; a missing target was a no-op.
    Ok(Redirect::to("/articles"))
}
