use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Insert the whole batch inside one transaction. Either every row is
    /// persisted or none are.
    async fn insert_all(&self, articles: Vec<NewArticle>) -> DomainResult<Vec<Article>>;
    /// Full overwrite of an existing row.
    async fn update(&self, article: &Article) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
