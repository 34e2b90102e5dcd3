//! Book -> author reference checks

use crate::{
    error::{AppError, AppResult},
    models::Author,
    repository::Table,
};

/// Decides whether a book may point at `author_id`.
#[cfg_attr(test, mockall::automock)]
pub trait AuthorReferencePolicy: Send + Sync {
    fn check(&self, author_id: &str, authors: &Table<Author>) -> AppResult<()>;
}

/// Accepts any id, the author does not have to exist
pub struct Unenforced;

impl AuthorReferencePolicy for Unenforced {
    fn check(&self, _author_id: &str, _authors: &Table<Author>) -> AppResult<()> {
        Ok(())
    }
}

/// Requires the author to be stored
pub struct Enforced;

impl AuthorReferencePolicy for Enforced {
    fn check(&self, author_id: &str, authors: &Table<Author>) -> AppResult<()> {
        if authors.contains(author_id) {
            Ok(())
        } else {
            Err(AppError::Validation(format!("Author not found: {}", author_id)))
        }
    }
}
