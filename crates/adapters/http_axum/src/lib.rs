//! # pantry-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the inventory operations
//!   (`/api/items`, `/api/items/{id}`, `/api/items/expiry`)
//! - Serve the inventory **report** as plain text (`/api/report`) and trigger
//!   its export to the configured report sink
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into HTTP status codes
//!
//! ## Dependency rule
//! Depends on `pantry-app` (for port traits and services) and `pantry-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
