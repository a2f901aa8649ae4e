use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }
}
