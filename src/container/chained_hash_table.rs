use log::{debug, info};
use std::fmt;

use crate::common::config::BucketIndex;
use crate::common::exception::TableError;
use crate::container::contact::Contact;
use crate::container::hash_function::CharSumHash;
use crate::container::hash_table::HashTable;

/// A single entry in a bucket chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    key: String,
    value: Contact,
}

impl ChainEntry {
    fn new(key: &str, number: &str) -> Self {
        Self {
            key: key.to_string(),
            value: Contact::new(key, number),
        }
    }

    pub fn get_key(&self) -> &str {
        &self.key
    }

    pub fn get_value(&self) -> &Contact {
        &self.value
    }
}

type Chain = Vec<ChainEntry>;

/**
 * ChainedHashTable maps contact names to contacts using separate chaining.
 *
 * The number of buckets is fixed at construction. Every entry reachable from
 * bucket `i` hashes to `i`, and keys are unique across the whole table. New
 * keys are appended to the tail of their bucket's chain; re-inserting an
 * existing key only overwrites its number.
 */
#[derive(Debug, Clone)]
pub struct ChainedHashTable {
    hash_fn: CharSumHash,
    buckets: Vec<Chain>,
    num_entries: usize,
}

impl ChainedHashTable {
    /// Creates a table with `capacity` empty buckets.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of buckets. Must be greater than zero.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        let hash_fn = CharSumHash::new(capacity)?;
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::new);

        info!("ChainedHashTable initialized with capacity: {}", capacity);
        Ok(Self {
            hash_fn,
            buckets,
            num_entries: 0,
        })
    }

    pub fn hash(&self, key: &str) -> BucketIndex {
        self.hash_fn.get_hash(key)
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.num_entries
    }

    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Returns the chain stored at `index`, head first, or `None` if the
    /// index is out of range.
    pub fn chain(&self, index: BucketIndex) -> Option<&[ChainEntry]> {
        self.buckets.get(index).map(|chain| chain.as_slice())
    }

    /// Iterates over every contact, bucket by bucket and head to tail within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|entry| &entry.value))
    }

    fn render_bucket(index: BucketIndex, chain: &[ChainEntry]) -> String {
        if chain.is_empty() {
            return format!("Index {}: Empty", index);
        }

        let contacts: Vec<String> = chain
            .iter()
            .map(|entry| format!("- {}", entry.value))
            .collect();
        format!("Index {}: {}", index, contacts.join(" "))
    }
}

impl HashTable for ChainedHashTable {
    fn insert(&mut self, key: &str, number: &str) {
        let index = self.hash(key);
        let chain = &mut self.buckets[index];

        // First match wins; keys are unique within a chain.
        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            debug!("Updated number for key {:?} in bucket {}", key, index);
            entry.value.set_number(number);
            return;
        }

        chain.push(ChainEntry::new(key, number));
        self.num_entries += 1;
        debug!(
            "Inserted key {:?} into bucket {} (chain length {})",
            key,
            index,
            chain.len()
        );
    }

    fn search(&self, key: &str) -> Option<&Contact> {
        let index = self.hash(key);
        let found = self.buckets[index]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value);

        match found {
            Some(_) => debug!("Found key {:?} in bucket {}", key, index),
            None => debug!("Key {:?} not found in bucket {}", key, index),
        }
        found
    }

    fn render(&self) -> Vec<String> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, chain)| Self::render_bucket(index, chain))
            .collect()
    }
}

impl fmt::Display for ChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}
