use log::trace;

use crate::common::config::BucketIndex;
use crate::common::exception::TableError;

/// Character-sum hash over a fixed number of buckets.
///
/// The hash adds up the Unicode scalar value of every character in the key and
/// reduces the sum modulo the capacity. It is order-insensitive, so any two
/// permutations of the same characters (`"Amy"` / `"May"`) always land in the
/// same bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSumHash {
    capacity: usize,
}

impl CharSumHash {
    /// Creates a new `CharSumHash`.
    ///
    /// # Returns
    /// `TableError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity(capacity));
        }
        Ok(Self { capacity })
    }

    pub fn get_capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the bucket index of the given key, in `[0, capacity)`.
    ///
    /// # Parameters
    /// - `key`: The key to be hashed. The empty key hashes to 0.
    pub fn get_hash(&self, key: &str) -> BucketIndex {
        // Reducing at every step keeps the accumulator below capacity.
        let modulus = self.capacity as u64;
        let index = key
            .chars()
            .fold(0u64, |acc, c| (acc + u64::from(c as u32)) % modulus);

        trace!("Hashed key {:?} to bucket {}", key, index);
        index as BucketIndex
    }
}
