//! Repository layer over the in-memory resource tables

pub mod authors;
pub mod books;
pub mod seed;
pub mod table;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Author, Book};
pub use table::{Record, Table};

/// Both resource tables. Books reference authors by id only.
#[derive(Debug, Default, Clone)]
pub struct Store {
    pub books: Table<Book>,
    pub authors: Table<Author>,
}

/// Shared handle on the store.
///
/// Each repository method takes the lock once, so a not-found check, the
/// caller's validation and the write happen as one step.
#[derive(Clone, Default)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
}

impl Repository {
    /// Create a repository owning the given store
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Repository pre-filled with the sample catalog
    pub fn seeded() -> Self {
        Self::new(seed::seed_store())
    }
}
