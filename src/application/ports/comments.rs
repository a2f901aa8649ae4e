// src/application/ports/comments.rs
use crate::application::dto::CommentDto;
use crate::application::error::ApplicationResult;
use crate::domain::article::ArticleId;
use async_trait::async_trait;

/// Capability: fetch the comments attached to an article from wherever they
/// live. The concrete client is injected so tests can substitute a canned one.
#[async_trait]
pub trait CommentClient: Send + Sync {
    async fn comments_for_article(&self, article_id: ArticleId)
        -> ApplicationResult<Vec<CommentDto>>;
}
