mod sqlite_article;

pub use sqlite_article::SqliteArticleRepository;
