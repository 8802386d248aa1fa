//! Storage port — keyed record persistence.

use std::future::Future;

use pantry_domain::error::PantryError;

/// A store of text records addressed by key.
///
/// A `write` replaces the whole record for its key in a single step; readers
/// never observe a partially written value.
pub trait KeyValueStore {
    /// Read the record stored under `key`, or `None` if it was never written.
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, PantryError>> + Send;

    /// Replace the record stored under `key`.
    fn write(&self, key: &str, value: String)
    -> impl Future<Output = Result<(), PantryError>> + Send;
}
