// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

impl Article {
    /// Field-wise conditional overwrite: a present field replaces the stored
    /// value, an absent field leaves it untouched. A present-but-empty string
    /// therefore clears the field, an absent one never does. The id is not
    /// part of the patch surface.
    pub fn patch(&mut self, patch: ArticlePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// An article that has not been persisted yet. The id only exists once the
/// store has assigned one.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

/// Partial update with explicit presence per field.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
}

impl ArticlePatch {
    pub fn new(title: Option<ArticleTitle>, content: Option<ArticleContent>) -> Self {
        Self { title, content }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
