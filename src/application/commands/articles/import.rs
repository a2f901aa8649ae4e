use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleTitle, NewArticle},
};

#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
}

pub struct ImportArticlesCommand {
    pub drafts: Vec<ArticleDraft>,
}

impl ArticleCommandService {
    /// Bulk create. The repository runs the whole batch inside one
    /// transaction, so either every draft is persisted or none are; a failure
    /// part-way through leaves the store exactly as it was.
    pub async fn import_articles(
        &self,
        command: ImportArticlesCommand,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let new_articles = command
            .drafts
            .into_iter()
            .map(|draft| NewArticle {
                title: ArticleTitle::new(draft.title),
                content: ArticleContent::new(draft.content),
            })
            .collect::<Vec<_>>();

        let created = self.repo.insert_all(new_articles).await?;
        tracing::info!(count = created.len(), "articles imported");
        Ok(created.into_iter().map(Into::into).collect())
    }
}
