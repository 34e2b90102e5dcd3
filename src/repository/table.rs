//! Insertion-ordered table keyed by record id

use indexmap::IndexMap;

/// A stored resource
pub trait Record: Clone {
    fn id(&self) -> &str;
}

impl Record for crate::models::Book {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for crate::models::Author {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Mapping from id to record. Listing follows insertion order; replacing a
/// record keeps its slot.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: IndexMap<String, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }
}

impl<T: Record> Table<T> {
    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn put(&mut self, record: T) {
        self.rows.insert(record.id().to_string(), record);
    }

    /// Remove a record, keeping the order of the remaining ones
    pub fn delete(&mut self, id: &str) -> bool {
        self.rows.shift_remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn list(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

impl<T: Record> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::default();
        for record in iter {
            table.put(record);
        }
        table
    }
}
