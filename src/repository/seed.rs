//! Sample catalog present at startup

use chrono::{DateTime, Utc};

use super::Store;
use crate::models::{Author, Book};

/// 2024-01-01T00:00:00Z
const SEEDED_AT: i64 = 1_704_067_200;

fn book(id: &str, title: &str, author_id: &str, isbn: &str, year: i32, price: f64, stock: i64) -> Book {
    let at = DateTime::<Utc>::from_timestamp(SEEDED_AT, 0).unwrap_or_default();
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author_id: author_id.to_string(),
        isbn: isbn.to_string(),
        published_year: year,
        price,
        stock,
        created_at: at,
        updated_at: at,
    }
}

fn author(id: &str, name: &str, birth_year: i32, nationality: &str) -> Author {
    let at = DateTime::<Utc>::from_timestamp(SEEDED_AT, 0).unwrap_or_default();
    Author {
        id: id.to_string(),
        name: name.to_string(),
        birth_year,
        nationality: nationality.to_string(),
        created_at: at,
        updated_at: at,
    }
}

pub fn seed_store() -> Store {
    Store {
        books: [
            book("1", "The Great Gatsby", "1", "978-0-7432-7356-5", 1925, 12.99, 42),
            book("2", "To Kill a Mockingbird", "2", "978-0-06-112008-4", 1960, 14.99, 28),
            book("3", "1984", "3", "978-0-452-28423-4", 1949, 13.99, 35),
        ]
        .into_iter()
        .collect(),
        authors: [
            author("1", "F. Scott Fitzgerald", 1896, "American"),
            author("2", "Harper Lee", 1926, "American"),
            author("3", "George Orwell", 1903, "British"),
        ]
        .into_iter()
        .collect(),
    }
}
