//! # pantry-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `KeyValueStore` — keyed record persistence for the item collection
//!   - `ReportSink` — destination for generated reports
//!   - `Clock` — source of the current time
//! - Own the **inventory repository**: whole-collection load/save on top of
//!   the key-value port
//! - Render the **inventory report** and the per-item expiry overview
//! - Define the **driving/inbound** `InventoryService` used by the outer surfaces
//!
//! ## Dependency rule
//! Depends on `pantry-domain` only (plus `tokio::sync` for locking).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod inventory;
pub mod ports;
pub mod report;
pub mod services;

#[cfg(test)]
mod test_support;
