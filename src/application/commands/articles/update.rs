use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleId, ArticlePatch, ArticleTitle},
};

pub struct UpdateArticleCommand {
    /// The id the request is addressed to.
    pub id: i64,
    /// The id the submitted form carries, if any. A mismatch with `id` means
    /// the request targets the wrong resource and must not mutate anything.
    pub form_id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandService {
    /// Patch-update an article. Absence of the target and a form/path id
    /// mismatch are both silent no-ops: `Ok(None)`, never an error.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let id = ArticleId::new(command.id);
        let Some(mut article) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if command.form_id.is_some_and(|form_id| form_id != command.id) {
            tracing::warn!(
                id = command.id,
                form_id = command.form_id,
                "update form id does not match target id, ignoring"
            );
            return Ok(None);
        }

        let patch = ArticlePatch::new(
            command.title.map(ArticleTitle::new),
            command.content.map(ArticleContent::new),
        );
        article.patch(patch);

        let updated = self.repo.update(&article).await?;
        tracing::info!(id = %updated.id, "article updated");
        Ok(Some(updated.into()))
    }
}
