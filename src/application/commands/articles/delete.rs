// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Delete an article. A missing target is a no-op; the removed record is
    /// returned so the caller can confirm what was deleted.
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let id = ArticleId::new(command.id);
        let Some(article) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        self.repo.delete(id).await?;
        tracing::info!(id = %id, "article deleted");
        Ok(Some(article.into()))
    }
}
