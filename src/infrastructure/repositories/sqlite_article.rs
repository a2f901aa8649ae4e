use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleRepository, ArticleTitle, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: ArticleId::new(row.id),
            title: ArticleTitle::new(row.title),
            content: ArticleContent::new(row.content),
        }
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content FROM articles ORDER BY id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content FROM articles WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(row.map(Article::from))
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content) VALUES (?, ?) RETURNING id, title, content",
        )
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(row.into())
    }

    async fn insert_all(&self, articles: Vec<NewArticle>) -> DomainResult<Vec<Article>> {
        let mut tx = self.pool.begin().await.map_err(map_error)?;
        let mut inserted = Vec::with_capacity(articles.len());

        // Any failure drops the transaction and rolls back every row above it.
        for article in articles {
            let row = sqlx::query_as::<_, ArticleRow>(
                "INSERT INTO articles (title, content) VALUES (?, ?) RETURNING id, title, content",
            )
            .bind(article.title.as_str())
            .bind(article.content.as_str())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_error)?;

            inserted.push(Article::from(row));
        }

        tx.commit().await.map_err(map_error)?;
        Ok(inserted)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = ?, content = ? WHERE id = ? RETURNING id, title, content",
        )
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(i64::from(article.id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::from)
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", article.id)))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}
