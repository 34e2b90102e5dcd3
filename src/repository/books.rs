//! Book domain methods on Repository

use super::{Repository, Table};
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookQuery},
};

fn book_not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl Repository {
    /// Books matching every supplied filter, in table order
    pub async fn books_search(&self, query: &BookQuery) -> Vec<Book> {
        let store = self.store.read().await;
        store
            .books
            .list()
            .filter(|book| query.matches(book))
            .cloned()
            .collect()
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: &str) -> AppResult<Book> {
        let store = self.store.read().await;
        store.books.get(id).cloned().ok_or_else(book_not_found)
    }

    /// Insert the book produced by `build`. Nothing is written if it fails.
    pub async fn books_create<F>(&self, build: F) -> AppResult<Book>
    where
        F: FnOnce(&Table<Author>) -> AppResult<Book>,
    {
        let mut guard = self.store.write().await;
        let store = &mut *guard;
        let book = build(&store.authors)?;
        store.books.put(book.clone());
        Ok(book)
    }

    /// Replace book `id` with the record produced from the current one.
    ///
    /// The existence check runs before `build`, so a missing id is reported
    /// even when the payload would not validate.
    pub async fn books_update<F>(&self, id: &str, build: F) -> AppResult<Book>
    where
        F: FnOnce(&Book, &Table<Author>) -> AppResult<Book>,
    {
        let mut guard = self.store.write().await;
        let store = &mut *guard;
        let existing = store.books.get(id).ok_or_else(book_not_found)?;
        let book = build(existing, &store.authors)?;
        store.books.put(book.clone());
        Ok(book)
    }

    /// Delete book
    pub async fn books_delete(&self, id: &str) -> AppResult<()> {
        let mut store = self.store.write().await;
        if !store.books.delete(id) {
            return Err(book_not_found());
        }
        Ok(())
    }
}
