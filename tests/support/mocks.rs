// tests/support/mocks.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use pressroom::application::dto::CommentDto;
use pressroom::application::error::ApplicationResult;
use pressroom::application::ports::comments::CommentClient;
use pressroom::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use pressroom::domain::errors::{DomainError, DomainResult};

/* -------------------------------- ArticleRepository -------------------------------- */

/// In-memory article store keyed by id, with monotonically assigned ids and
/// an optional failure injected part-way through a batch insert. Batches are
/// staged and merged only on full success, mirroring the all-or-nothing
/// contract of the SQLite implementation.
pub struct InMemoryArticleRepo {
    inner: Mutex<Store>,
    fail_batch_at: Option<usize>,
}

struct Store {
    articles: BTreeMap<i64, Article>,
    next_id: i64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Store {
                articles: BTreeMap::new(),
                next_id: 1,
            }),
            fail_batch_at: None,
        }
    }

    /// Fail the batch insert when it reaches the given zero-based index.
    pub fn failing_batch_at(index: usize) -> Self {
        Self {
            fail_batch_at: Some(index),
            ..Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }
}

impl Default for InMemoryArticleRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(store.articles.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(store.articles.get(&i64::from(id)).cloned())
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        Ok(store.persist(article))
    }

    async fn insert_all(&self, articles: Vec<NewArticle>) -> DomainResult<Vec<Article>> {
        let mut store = self.inner.lock().unwrap();
        let mut staged = Vec::with_capacity(articles.len());
        let mut next_id = store.next_id;

        for (index, article) in articles.into_iter().enumerate() {
            if self.fail_batch_at == Some(index) {
                // Nothing staged so far is merged; the store is untouched.
                return Err(DomainError::Persistence("injected batch failure".into()));
            }
            staged.push(Article {
                id: ArticleId::new(next_id),
                title: article.title,
                content: article.content,
            });
            next_id += 1;
        }

        for article in &staged {
            store.articles.insert(i64::from(article.id), article.clone());
        }
        store.next_id = next_id;
        Ok(staged)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        let id = i64::from(article.id);
        if !store.articles.contains_key(&id) {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }
        store.articles.insert(id, article.clone());
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store.articles.remove(&i64::from(id));
        Ok(())
    }
}

impl Store {
    fn persist(&mut self, article: NewArticle) -> Article {
        let article = Article {
            id: ArticleId::new(self.next_id),
            title: article.title,
            content: article.content,
        };
        self.next_id += 1;
        self.articles.insert(i64::from(article.id), article.clone());
        article
    }
}

/* -------------------------------- CommentClient -------------------------------- */

/// Canned comment source: returns the comments whose `article_id` matches.
pub struct StaticCommentClient {
    comments: Vec<CommentDto>,
}

impl StaticCommentClient {
    pub fn new(comments: Vec<CommentDto>) -> Self {
        Self { comments }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CommentClient for StaticCommentClient {
    async fn comments_for_article(
        &self,
        article_id: ArticleId,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = i64::from(article_id);
        Ok(self
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect())
    }
}
