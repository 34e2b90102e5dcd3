//! Author domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorBooks},
};

fn author_not_found() -> AppError {
    AppError::NotFound("Author not found".to_string())
}

impl Repository {
    /// List all authors in table order
    pub async fn authors_list(&self) -> Vec<Author> {
        let store = self.store.read().await;
        store.authors.list().cloned().collect()
    }

    /// Get author by ID
    pub async fn authors_get_by_id(&self, id: &str) -> AppResult<Author> {
        let store = self.store.read().await;
        store.authors.get(id).cloned().ok_or_else(author_not_found)
    }

    /// Insert author
    pub async fn authors_create(&self, author: Author) -> Author {
        let mut store = self.store.write().await;
        store.authors.put(author.clone());
        author
    }

    /// Replace author `id` with the record produced from the current one.
    /// The existence check runs before `build`.
    pub async fn authors_update<F>(&self, id: &str, build: F) -> AppResult<Author>
    where
        F: FnOnce(&Author) -> AppResult<Author>,
    {
        let mut store = self.store.write().await;
        let existing = store.authors.get(id).ok_or_else(author_not_found)?;
        let author = build(existing)?;
        store.authors.put(author.clone());
        Ok(author)
    }

    /// Delete author. Books referencing it are left untouched.
    pub async fn authors_delete(&self, id: &str) -> AppResult<()> {
        let mut store = self.store.write().await;
        if !store.authors.delete(id) {
            return Err(author_not_found());
        }
        Ok(())
    }

    /// Author with every book whose `author_id` matches, read in one snapshot
    pub async fn authors_get_with_books(&self, id: &str) -> AppResult<AuthorBooks> {
        let store = self.store.read().await;
        let author = store.authors.get(id).cloned().ok_or_else(author_not_found)?;
        let books: Vec<_> = store
            .books
            .list()
            .filter(|book| book.author_id == id)
            .cloned()
            .collect();
        Ok(AuthorBooks {
            author,
            count: books.len(),
            books,
        })
    }
}
