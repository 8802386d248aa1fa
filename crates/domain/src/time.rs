//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used as the "now" reference for expiry computations.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
