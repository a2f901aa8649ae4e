// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{dto::CommentDto, error::ApplicationResult, ports::comments::CommentClient},
    domain::article::ArticleId,
};

pub struct ListCommentsQuery {
    pub article_id: i64,
}

pub struct CommentQueryService {
    client: Arc<dyn CommentClient>,
}

impl CommentQueryService {
    pub fn new(client: Arc<dyn CommentClient>) -> Self {
        Self { client }
    }

    /// Fetch the comments for one article from the remote source. Nothing is
    /// cached or persisted; an article without comments yields an empty list.
    pub async fn comments_for_article(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        self.client
            .comments_for_article(ArticleId::new(query.article_id))
            .await
    }
}
