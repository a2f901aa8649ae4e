use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Absence is an empty result, never an error; what to do with a missing
    /// article is the caller's decision.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let article = self.repo.find_by_id(ArticleId::new(query.id)).await?;
        Ok(article.map(Into::into))
    }
}
