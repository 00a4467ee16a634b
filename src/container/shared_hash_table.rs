use parking_lot::RwLock;
use std::sync::Arc;

use crate::common::exception::TableError;
use crate::container::chained_hash_table::ChainedHashTable;
use crate::container::contact::Contact;
use crate::container::hash_table::HashTable;

/// A [`ChainedHashTable`] behind a single reader-writer lock.
///
/// Cloning the handle shares the underlying table. `search` returns an owned
/// [`Contact`] since a reference cannot outlive the read guard.
#[derive(Debug, Clone)]
pub struct SharedHashTable {
    inner: Arc<RwLock<ChainedHashTable>>,
}

impl SharedHashTable {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Ok(Self::from_table(ChainedHashTable::new(capacity)?))
    }

    pub fn from_table(table: ChainedHashTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    pub fn insert(&self, key: &str, number: &str) {
        self.inner.write().insert(key, number);
    }

    pub fn search(&self, key: &str) -> Option<Contact> {
        self.inner.read().search(key).cloned()
    }

    pub fn render(&self) -> Vec<String> {
        self.inner.read().render()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
