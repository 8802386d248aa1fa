//! Clock port — where "now" comes from.

use pantry_domain::time::{self, Timestamp};

/// Source of the current time used for expiry computations.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
