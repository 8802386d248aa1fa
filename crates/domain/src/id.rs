//! Item identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for an [`Item`](crate::item::Item).
///
/// Freshly generated ids are random UUIDs, but any text is accepted when
/// reading a stored collection: the identifier is only ever compared for
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl Default for ItemId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl ItemId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
