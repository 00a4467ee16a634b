use crate::container::contact::Contact;

pub trait HashTable {
    /// Inserts a contact under `key`, or overwrites the number of the
    /// existing contact stored under `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The contact name used as the lookup key.
    /// * `number` - The phone number to store.
    fn insert(&mut self, key: &str, number: &str);

    /// Performs a point query on the hash table.
    ///
    /// # Returns
    ///
    /// The contact stored under `key`, or `None` if the key was never inserted.
    fn search(&self, key: &str) -> Option<&Contact>;

    /// Renders one human-readable line per bucket, in bucket order.
    fn render(&self) -> Vec<String>;
}
