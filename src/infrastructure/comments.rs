// src/infrastructure/comments.rs
use crate::application::dto::CommentDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::comments::CommentClient;
use crate::domain::article::ArticleId;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

/// Shape of a comment as the remote mock API serves it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteComment {
    id: i64,
    article_id: i64,
    nickname: String,
    body: String,
}

impl From<RemoteComment> for CommentDto {
    fn from(remote: RemoteComment) -> Self {
        CommentDto {
            id: remote.id,
            article_id: remote.article_id,
            nickname: remote.nickname,
            body: remote.body,
        }
    }
}

/// Comment client backed by the remote mock API. One GET per lookup, no
/// retries, nothing cached.
pub struct HttpCommentClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCommentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CommentClient for HttpCommentClient {
    async fn comments_for_article(
        &self,
        article_id: ArticleId,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let url = format!("{}/articles/{}/comments", self.base_url, article_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("comment fetch: {err}")))?;

        // The mock API answers 404 for an article without comments.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let response = response
            .error_for_status()
            .map_err(|err| ApplicationError::infrastructure(format!("comment fetch: {err}")))?;

        let remote: Vec<RemoteComment> = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("comment decode: {err}")))?;

        Ok(remote.into_iter().map(Into::into).collect())
    }
}
