//! BookStore API
//!
//! A REST JSON API over two in-memory resource collections, books and
//! authors, with filtering and an author-to-books lookup.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// State over the given repository
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, &config.catalog);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }

    /// State over a freshly seeded store
    pub fn seeded(config: AppConfig) -> Self {
        Self::new(config, repository::Repository::seeded())
    }
}
