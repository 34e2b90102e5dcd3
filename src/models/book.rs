//! Book model and related types

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::required;
use crate::error::AppResult;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Soft reference to an author id
    pub author_id: String,
    pub isbn: String,
    pub published_year: i32,
    pub price: f64,
    pub stock: i64,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Create / replace book request.
///
/// `title`, `author_id`, `isbn`, `published_year` and `price` are required;
/// `stock` defaults to 0. Fields are optional at the decoding level so a
/// missing key is reported by name rather than as a decoding error.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author_id: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// Partial update request, only the supplied fields are applied
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author_id: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// Validated book fields
#[derive(Debug, Clone, PartialEq)]
pub struct BookFields {
    pub title: String,
    pub author_id: String,
    pub isbn: String,
    pub published_year: i32,
    pub price: f64,
    pub stock: i64,
}

impl CreateBook {
    /// Check required fields in declaration order and fill defaults
    pub fn validate(self) -> AppResult<BookFields> {
        Ok(BookFields {
            title: required(self.title, "title")?,
            author_id: required(self.author_id, "author_id")?,
            isbn: required(self.isbn, "isbn")?,
            published_year: required(self.published_year, "published_year")?,
            price: required(self.price, "price")?,
            stock: self.stock.unwrap_or(0),
        })
    }
}

impl Book {
    pub fn new(id: String, fields: BookFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            author_id: fields.author_id,
            isbn: fields.isbn,
            published_year: fields.published_year,
            price: fields.price,
            stock: fields.stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replacement keeping `id` and `created_at`
    pub fn replaced(&self, fields: BookFields, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            ..Self::new(self.id.clone(), fields, now)
        }
    }

    /// Field-by-field merge; `updated_at` is refreshed even for an empty patch
    pub fn patched(&self, patch: UpdateBook, now: DateTime<Utc>) -> Self {
        let mut book = self.clone();
        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author_id) = patch.author_id {
            book.author_id = author_id;
        }
        if let Some(isbn) = patch.isbn {
            book.isbn = isbn;
        }
        if let Some(published_year) = patch.published_year {
            book.published_year = published_year;
        }
        if let Some(price) = patch.price {
            book.price = price;
        }
        if let Some(stock) = patch.stock {
            book.stock = stock;
        }
        book.updated_at = now;
        book
    }
}

/// Book list filters. All supplied filters must match.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Filter books by author ID
    pub author_id: Option<String>,
    /// Books with price greater than or equal to this value
    #[serde(default, deserialize_with = "lenient_f64")]
    pub min_price: Option<f64>,
    /// Books with price less than or equal to this value
    #[serde(default, deserialize_with = "lenient_f64")]
    pub max_price: Option<f64>,
}

impl BookQuery {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(author_id) = self.author_id.as_deref().filter(|id| !id.is_empty()) {
            if book.author_id != author_id {
                return false;
            }
        }
        // NaN bounds compare as None and match nothing
        if let Some(min) = self.min_price {
            if matches!(book.price.partial_cmp(&min), Some(Ordering::Less) | None) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if matches!(book.price.partial_cmp(&max), Some(Ordering::Greater) | None) {
                return false;
            }
        }
        true
    }
}

/// Unparseable numbers are dropped instead of rejecting the request
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse::<f64>().ok()))
}

/// Book list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookList {
    pub books: Vec<Book>,
    pub count: usize,
}

impl From<Vec<Book>> for BookList {
    fn from(books: Vec<Book>) -> Self {
        Self {
            count: books.len(),
            books,
        }
    }
}
