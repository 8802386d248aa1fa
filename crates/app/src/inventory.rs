//! Inventory repository — the authoritative, persisted item collection.
//!
//! The whole collection is stored as one JSON array under a single key of a
//! [`KeyValueStore`]. Every write replaces the full array; appending and
//! removing are read-modify-write cycles over the complete collection.

use tokio::sync::Mutex;

use pantry_domain::error::PantryError;
use pantry_domain::id::ItemId;
use pantry_domain::item::Item;

use crate::ports::KeyValueStore;

/// Key under which the collection is stored.
pub const COLLECTION_KEY: &str = "products";

/// Repository owning the persisted item collection.
///
/// Consumers only ever get snapshots back; they re-synchronize by calling
/// [`Inventory::load`] again.
pub struct Inventory<S> {
    store: S,
    // Serializes `add`/`remove` so two cycles in this process cannot
    // interleave between their load and save.
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> Inventory<S> {
    /// Create a repository on top of the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the persisted collection.
    ///
    /// Never fails: a missing record, an unreadable store and a record that
    /// is not a valid item array all yield an empty collection.
    pub async fn load(&self) -> Vec<Item> {
        self.try_load().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load item collection, using empty one");
            Vec::new()
        })
    }

    /// Read the persisted collection, reporting why it could not be read.
    ///
    /// A missing record is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`PantryError::Storage`] if the store read fails or the record
    /// does not decode as an item array.
    pub async fn try_load(&self) -> Result<Vec<Item>, PantryError> {
        let Some(raw) = self.store.read(COLLECTION_KEY).await? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|err| PantryError::Storage(Box::new(err)))
    }

    /// Replace the persisted collection with `items`.
    ///
    /// # Errors
    ///
    /// Returns [`PantryError::Storage`] if the collection cannot be encoded
    /// or the store rejects the write.
    pub async fn save(&self, items: &[Item]) -> Result<(), PantryError> {
        let raw = serde_json::to_string(items).map_err(|err| PantryError::Storage(Box::new(err)))?;
        self.store.write(COLLECTION_KEY, raw).await?;
        tracing::debug!(count = items.len(), "item collection saved");
        Ok(())
    }

    /// Append `item` to the collection and persist the result.
    ///
    /// Returns the collection as saved.
    ///
    /// # Errors
    ///
    /// Returns [`PantryError::Storage`] if the stored collection cannot be
    /// read or saving fails; the stored collection is then left as it was.
    pub async fn add(&self, item: Item) -> Result<Vec<Item>, PantryError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.try_load().await?;
        items.push(item);
        self.save(&items).await?;
        Ok(items)
    }

    /// Remove the item with `id` and persist the result.
    ///
    /// Unknown ids leave the collection unchanged. Returns the collection as
    /// saved.
    ///
    /// # Errors
    ///
    /// Returns [`PantryError::Storage`] if the stored collection cannot be
    /// read or saving fails; nothing is written in either case.
    pub async fn remove(&self, id: &ItemId) -> Result<Vec<Item>, PantryError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.try_load().await?;
        items.retain(|item| &item.id != id);
        self.save(&items).await?;
        Ok(items)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryStore, UnreadableStore};

    fn item(id: &str, name: &str) -> Item {
        Item::builder()
            .id(id)
            .name(name)
            .expiry_date("01/01/2030")
            .quantity(1)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_load_empty_collection_when_nothing_stored() {
        let inventory = Inventory::new(InMemoryStore::default());
        assert!(inventory.load().await.is_empty());
    }

    #[tokio::test]
    async fn should_load_empty_collection_when_record_is_malformed() {
        let inventory = Inventory::new(InMemoryStore::with_record(COLLECTION_KEY, "{not json"));
        assert!(inventory.load().await.is_empty());
    }

    #[tokio::test]
    async fn should_load_empty_collection_when_record_has_wrong_shape() {
        let store = InMemoryStore::with_record(COLLECTION_KEY, r#"[{"id":"1","name":"Milk"}]"#);
        let inventory = Inventory::new(store);
        assert!(inventory.load().await.is_empty());
    }

    #[tokio::test]
    async fn should_load_empty_collection_when_store_read_fails() {
        let inventory = Inventory::new(UnreadableStore);
        assert!(inventory.load().await.is_empty());
    }

    #[tokio::test]
    async fn should_load_collection_written_by_legacy_client() {
        let raw = concat!(
            r#"[{"id":"1717171717171","name":"Leite","#,
            r#""expiryDate":"10/10/2030","quantity":3}]"#,
        );
        let inventory = Inventory::new(InMemoryStore::with_record(COLLECTION_KEY, raw));

        let items = inventory.load().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_str(), "1717171717171");
        assert_eq!(items[0].name, "Leite");
        assert_eq!(items[0].quantity, 3);
    }

    #[tokio::test]
    async fn should_roundtrip_collection_preserving_order() {
        let inventory = Inventory::new(InMemoryStore::default());
        let items = vec![item("a", "Milk"), item("b", "Eggs"), item("c", "Milk")];

        inventory.save(&items).await.unwrap();

        assert_eq!(inventory.load().await, items);
    }

    #[tokio::test]
    async fn should_replace_prior_collection_on_save() {
        let inventory = Inventory::new(InMemoryStore::default());
        inventory
            .save(&[item("a", "Milk"), item("b", "Eggs")])
            .await
            .unwrap();

        inventory.save(&[item("c", "Bread")]).await.unwrap();

        let loaded = inventory.load().await;
        assert_eq!(loaded, vec![item("c", "Bread")]);
    }

    #[tokio::test]
    async fn should_surface_save_failure() {
        let inventory = Inventory::new(InMemoryStore::failing_writes());
        let result = inventory.save(&[item("a", "Milk")]).await;
        assert!(matches!(result, Err(PantryError::Storage(_))));
    }

    #[tokio::test]
    async fn should_append_item_on_add() {
        let inventory = Inventory::new(InMemoryStore::default());
        inventory.add(item("a", "Milk")).await.unwrap();
        let saved = inventory.add(item("b", "Eggs")).await.unwrap();

        assert_eq!(saved, vec![item("a", "Milk"), item("b", "Eggs")]);
        assert_eq!(inventory.load().await, saved);
    }

    #[tokio::test]
    async fn should_not_deduplicate_identical_names() {
        let inventory = Inventory::new(InMemoryStore::default());
        inventory.add(item("a", "Milk")).await.unwrap();
        inventory.add(item("b", "Milk")).await.unwrap();
        assert_eq!(inventory.load().await.len(), 2);
    }

    #[tokio::test]
    async fn should_remove_exactly_one_item_and_keep_order() {
        let inventory = Inventory::new(InMemoryStore::default());
        inventory
            .save(&[item("a", "Milk"), item("b", "Eggs"), item("c", "Bread")])
            .await
            .unwrap();

        let saved = inventory.remove(&ItemId::from("b")).await.unwrap();

        assert_eq!(saved, vec![item("a", "Milk"), item("c", "Bread")]);
        assert_eq!(inventory.load().await, saved);
    }

    #[tokio::test]
    async fn should_leave_collection_unchanged_when_removing_unknown_id() {
        let inventory = Inventory::new(InMemoryStore::default());
        let items = vec![item("a", "Milk"), item("b", "Eggs")];
        inventory.save(&items).await.unwrap();

        inventory.remove(&ItemId::from("zzz")).await.unwrap();

        assert_eq!(inventory.load().await, items);
    }

    #[tokio::test]
    async fn should_keep_stored_collection_when_add_fails() {
        let store = InMemoryStore::failing_writes();
        let inventory = Inventory::new(store);

        let result = inventory.add(item("a", "Milk")).await;

        assert!(matches!(result, Err(PantryError::Storage(_))));
        assert!(inventory.load().await.is_empty());
    }

    #[tokio::test]
    async fn should_report_read_failure_from_try_load() {
        let inventory = Inventory::new(UnreadableStore);
        let result = inventory.try_load().await;
        assert!(matches!(result, Err(PantryError::Storage(_))));
    }

    #[tokio::test]
    async fn should_abort_add_without_writing_when_read_fails() {
        let inventory = Inventory::new(InMemoryStore::default());
        inventory
            .save(&[item("a", "Milk"), item("b", "Eggs"), item("c", "Bread")])
            .await
            .unwrap();
        let before = inventory.store().record(COLLECTION_KEY);

        inventory.store().fail_next_read();
        let result = inventory.add(item("d", "Butter")).await;

        assert!(matches!(result, Err(PantryError::Storage(_))));
        assert_eq!(inventory.store().record(COLLECTION_KEY), before);
        assert_eq!(inventory.load().await.len(), 3);
    }

    #[tokio::test]
    async fn should_abort_remove_without_writing_when_read_fails() {
        let inventory = Inventory::new(InMemoryStore::default());
        inventory
            .save(&[item("a", "Milk"), item("b", "Eggs")])
            .await
            .unwrap();
        let before = inventory.store().record(COLLECTION_KEY);

        inventory.store().fail_next_read();
        let result = inventory.remove(&ItemId::from("a")).await;

        assert!(matches!(result, Err(PantryError::Storage(_))));
        assert_eq!(inventory.store().record(COLLECTION_KEY), before);
    }

    #[tokio::test]
    async fn should_keep_undecodable_legacy_record_when_adding() {
        let raw = concat!(
            r#"[{"id":"1717171717171","name":"Leite","#,
            r#""expiryDate":"10/10/2030","quantity":3},"#,
            r#"{"id":"1717171717172","name":"Ovos","#,
            r#""expiryDate":"11/10/2030","quantity":null}]"#,
        );
        let inventory = Inventory::new(InMemoryStore::with_record(COLLECTION_KEY, raw));

        let result = inventory.add(item("d", "Butter")).await;

        assert!(matches!(result, Err(PantryError::Storage(_))));
        assert_eq!(
            inventory.store().record(COLLECTION_KEY).as_deref(),
            Some(raw)
        );
    }

    #[tokio::test]
    async fn should_store_collection_under_products_key() {
        let inventory = Inventory::new(InMemoryStore::default());
        inventory.add(item("a", "Milk")).await.unwrap();
        assert!(inventory.store().record("products").is_some());
    }
}
