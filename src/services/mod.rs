//! Business logic services

pub mod authors;
pub mod books;
pub mod references;

use std::sync::Arc;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub authors: authors::AuthorsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, catalog_config: &CatalogConfig) -> Self {
        let references: Arc<dyn references::AuthorReferencePolicy> =
            if catalog_config.enforce_author_reference {
                Arc::new(references::Enforced)
            } else {
                Arc::new(references::Unenforced)
            };

        Self {
            books: books::BooksService::new(repository.clone(), references),
            authors: authors::AuthorsService::new(repository),
        }
    }
}
