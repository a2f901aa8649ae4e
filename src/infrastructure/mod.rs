pub mod comments;
pub mod database;
pub mod repositories;
