//! Book management service

use std::sync::Arc;

use uuid::Uuid;

use super::references::AuthorReferencePolicy;
use crate::{
    error::AppResult,
    models::{utc_now, Book, BookQuery, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    references: Arc<dyn AuthorReferencePolicy>,
}

impl BooksService {
    pub fn new(repository: Repository, references: Arc<dyn AuthorReferencePolicy>) -> Self {
        Self {
            repository,
            references,
        }
    }

    /// Search books with filters
    pub async fn search(&self, query: &BookQuery) -> Vec<Book> {
        self.repository.books_search(query).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        let result = self.repository.books_get_by_id(id).await;
        if result.is_err() {
            tracing::debug!("Book {} not found", id);
        }
        result
    }

    /// Create a book with a freshly generated id
    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let book = self
            .repository
            .books_create(|authors| {
                let fields = data.validate()?;
                self.references.check(&fields.author_id, authors)?;
                Ok(Book::new(Uuid::new_v4().to_string(), fields, utc_now()))
            })
            .await?;
        tracing::info!("Created book {} ({})", book.id, book.title);
        Ok(book)
    }

    /// Full replacement, `id` and `created_at` are preserved.
    ///
    /// `payload` may carry a body decoding error; it surfaces only after the
    /// book is found.
    pub async fn replace(&self, id: &str, payload: AppResult<CreateBook>) -> AppResult<Book> {
        let book = self
            .repository
            .books_update(id, |existing, authors| {
                let fields = payload?.validate()?;
                self.references.check(&fields.author_id, authors)?;
                Ok(existing.replaced(fields, utc_now()))
            })
            .await?;
        tracing::info!("Replaced book {}", book.id);
        Ok(book)
    }

    /// Apply the supplied fields only
    pub async fn patch(&self, id: &str, payload: AppResult<UpdateBook>) -> AppResult<Book> {
        let book = self
            .repository
            .books_update(id, |existing, authors| {
                let data = payload?;
                if let Some(author_id) = data.author_id.as_deref() {
                    self.references.check(author_id, authors)?;
                }
                Ok(existing.patched(data, utc_now()))
            })
            .await?;
        tracing::info!("Updated book {}", book.id);
        Ok(book)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }
}
