use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// All articles in store order. No sort contract beyond what the store
    /// happens to return.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.repo.find_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
