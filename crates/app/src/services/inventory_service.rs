//! Inventory service — the operations exposed to the user-facing surfaces.

use pantry_domain::error::PantryError;
use pantry_domain::id::ItemId;
use pantry_domain::item::{Item, ItemInput};

use crate::inventory::Inventory;
use crate::ports::{Clock, KeyValueStore, ReportSink};
use crate::report::{self, ItemExpiry};

/// Application service for adding, deleting, listing and reporting items.
pub struct InventoryService<S, C, R> {
    inventory: Inventory<S>,
    clock: C,
    sink: R,
}

impl<S, C, R> InventoryService<S, C, R>
where
    S: KeyValueStore,
    C: Clock,
    R: ReportSink,
{
    /// Create a new service backed by the given store, clock and report sink.
    pub fn new(store: S, clock: C, sink: R) -> Self {
        Self {
            inventory: Inventory::new(store),
            clock,
            sink,
        }
    }

    /// Validate raw input, normalize its date and append the new item.
    ///
    /// # Errors
    ///
    /// Returns [`PantryError::Validation`] if a field is blank or the
    /// quantity is not a non-negative integer (nothing is stored), or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn add_item(&self, input: ItemInput) -> Result<Item, PantryError> {
        let item = input.into_item()?;
        self.inventory.add(item.clone()).await?;
        tracing::info!(item_id = %item.id, expiry_date = %item.expiry_date, "item added");
        Ok(item)
    }

    /// Delete the item with `id`. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: &ItemId) -> Result<(), PantryError> {
        let remaining = self.inventory.remove(id).await?;
        tracing::info!(remaining = remaining.len(), "item deleted");
        Ok(())
    }

    /// Snapshot of the current collection, in insertion order.
    pub async fn list_items(&self) -> Vec<Item> {
        self.inventory.load().await
    }

    /// Each item with its signed day count and freshness status.
    pub async fn expiry_overview(&self) -> Vec<ItemExpiry> {
        let items = self.inventory.load().await;
        report::expiry_overview(&items, self.clock.now())
    }

    /// Render the plain-text report for the current collection.
    pub async fn build_report(&self) -> String {
        let items = self.inventory.load().await;
        report::generate(&items, self.clock.now())
    }

    /// Render the report and hand it to the configured sink.
    ///
    /// Returns the location reported by the sink.
    ///
    /// # Errors
    ///
    /// Returns the sink's error, typically [`PantryError::Export`].
    #[tracing::instrument(skip(self))]
    pub async fn export_report(&self) -> Result<String, PantryError> {
        let report = self.build_report().await;
        let location = self.sink.publish(report).await?;
        tracing::info!(%location, "report exported");
        Ok(location)
    }
}
