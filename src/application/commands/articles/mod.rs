mod create;
mod delete;
mod import;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use import::{ArticleDraft, ImportArticlesCommand};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
