// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    comments_api_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://pressroom.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_comments_api_url() -> String {
    // json-server style mock serving /articles/{id}/comments
    "http://127.0.0.1:3001".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let comments_api_url =
            env::var("COMMENTS_API_URL").unwrap_or_else(|_| default_comments_api_url());

        if comments_api_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "COMMENTS_API_URL must not be empty".into(),
            ));
        }

        Ok(Self {
            database_url,
            listen_addr,
            comments_api_url,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn comments_api_url(&self) -> &str {
        &self.comments_api_url
    }
}
