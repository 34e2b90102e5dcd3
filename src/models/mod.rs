//! Data models for the BookStore API

pub mod author;
pub mod book;
pub mod timestamp;

use chrono::{DateTime, SubsecRound, Utc};

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use author::{Author, AuthorBooks, AuthorList, CreateAuthor};
pub use book::{Book, BookList, BookQuery, CreateBook, UpdateBook};

/// Current time at microsecond precision, serialized as ISO-8601 with a `Z` suffix
pub fn utc_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Unwrap a payload field that must be present
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> AppResult<T> {
    value.ok_or(AppError::MissingField(field))
}
