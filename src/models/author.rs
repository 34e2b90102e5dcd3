//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{book::Book, required};
use crate::error::AppResult;

/// Author record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub birth_year: i32,
    pub nationality: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Create / replace author request (`name`, `birth_year` and `nationality` are required)
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub name: Option<String>,
    pub birth_year: Option<i32>,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorFields {
    pub name: String,
    pub birth_year: i32,
    pub nationality: String,
}

impl CreateAuthor {
    pub fn validate(self) -> AppResult<AuthorFields> {
        Ok(AuthorFields {
            name: required(self.name, "name")?,
            birth_year: required(self.birth_year, "birth_year")?,
            nationality: required(self.nationality, "nationality")?,
        })
    }
}

impl Author {
    pub fn new(id: String, fields: AuthorFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            birth_year: fields.birth_year,
            nationality: fields.nationality,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replacement keeping `id` and `created_at`
    pub fn replaced(&self, fields: AuthorFields, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            ..Self::new(self.id.clone(), fields, now)
        }
    }
}

/// Author list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorList {
    pub authors: Vec<Author>,
    pub count: usize,
}

impl From<Vec<Author>> for AuthorList {
    fn from(authors: Vec<Author>) -> Self {
        Self {
            count: authors.len(),
            authors,
        }
    }
}

/// An author together with the books referencing it
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorBooks {
    pub author: Author,
    pub books: Vec<Book>,
    pub count: usize,
}
