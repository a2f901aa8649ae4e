// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::comments::CommentClient,
        queries::{articles::ArticleQueryService, comments::CommentQueryService},
    },
    domain::article::ArticleRepository,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        comment_client: Arc<dyn CommentClient>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&article_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));
        let comment_queries = Arc::new(CommentQueryService::new(comment_client));

        Self {
            article_commands,
            article_queries,
            comment_queries,
        }
    }
}
