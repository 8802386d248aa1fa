//! Shared application state for axum handlers.

use std::sync::Arc;

use pantry_app::ports::{Clock, KeyValueStore, ReportSink};
use pantry_app::services::inventory_service::InventoryService;

/// Application state shared across all axum handlers.
///
/// Generic over the store, clock and report sink to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S, C, R> {
    /// Inventory operations.
    pub inventory_service: Arc<InventoryService<S, C, R>>,
}

impl<S, C, R> Clone for AppState<S, C, R> {
    fn clone(&self) -> Self {
        Self {
            inventory_service: Arc::clone(&self.inventory_service),
        }
    }
}

impl<S, C, R> AppState<S, C, R>
where
    S: KeyValueStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    R: ReportSink + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(inventory_service: InventoryService<S, C, R>) -> Self {
        Self {
            inventory_service: Arc::new(inventory_service),
        }
    }
}
