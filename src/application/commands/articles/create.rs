// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle {
            title: ArticleTitle::new(command.title),
            content: ArticleContent::new(command.content),
        };

        let created = self.repo.insert(new_article).await?;
        tracing::info!(id = %created.id, "article created");
        Ok(created.into())
    }
}
