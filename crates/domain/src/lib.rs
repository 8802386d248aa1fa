//! # pantry-domain
//!
//! Pure domain model for the pantry perishable-inventory tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Items** (name, expiry date, quantity, identity)
//! - Normalize free-form expiry date input into the canonical `DD/MM/YYYY` form
//! - Compute the number of days between a canonical date and a point in time
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod expiry;
pub mod expiry_date;
pub mod item;
