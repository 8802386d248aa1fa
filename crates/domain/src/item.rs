//! Item — a tracked perishable with a name, an expiry date and a quantity.

use serde::{Deserialize, Serialize};

use crate::error::{PantryError, ValidationError};
use crate::expiry_date;
use crate::id::ItemId;

/// A tracked inventory record.
///
/// Items are never mutated after creation. The serialized field names match
/// the stored collection layout (`id`, `name`, `expiryDate`, `quantity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Canonical `DD/MM/YYYY` text, or the raw input when it could not be
    /// normalized.
    pub expiry_date: String,
    pub quantity: u32,
}

impl Item {
    /// Create a builder for constructing an [`Item`].
    #[must_use]
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PantryError::Validation`] when `name` or `expiry_date` is
    /// blank.
    pub fn validate(&self) -> Result<(), PantryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.expiry_date.trim().is_empty() {
            return Err(ValidationError::EmptyExpiryDate.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Item`].
#[derive(Debug, Default)]
pub struct ItemBuilder {
    id: Option<ItemId>,
    name: Option<String>,
    expiry_date: Option<String>,
    quantity: u32,
}

impl ItemBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the expiry date, normalizing it to `DD/MM/YYYY` when possible.
    #[must_use]
    pub fn expiry_date(mut self, raw: &str) -> Self {
        self.expiry_date = Some(expiry_date::normalize(raw));
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Consume the builder, validate, and return an [`Item`].
    ///
    /// # Errors
    ///
    /// Returns [`PantryError::Validation`] if `name` or `expiry_date` is
    /// missing or blank.
    pub fn build(self) -> Result<Item, PantryError> {
        let item = Item {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            expiry_date: self.expiry_date.unwrap_or_default(),
            quantity: self.quantity,
        };
        item.validate()?;
        Ok(item)
    }
}

/// Raw, user-entered text for a new item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: String,
    pub expiry_date: String,
    pub quantity: String,
}

impl ItemInput {
    /// Validate the raw fields and build a new [`Item`] with a fresh id.
    ///
    /// All three fields must be non-blank. The date goes through
    /// [`expiry_date::normalize`]; the quantity must parse as a
    /// non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`PantryError::Validation`] for the first field that fails.
    pub fn into_item(self) -> Result<Item, PantryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.expiry_date.trim().is_empty() {
            return Err(ValidationError::EmptyExpiryDate.into());
        }
        let quantity = self.quantity.trim();
        if quantity.is_empty() {
            return Err(ValidationError::EmptyQuantity.into());
        }
        let quantity: u32 = quantity
            .parse()
            .map_err(|_| ValidationError::InvalidQuantity(self.quantity.clone()))?;

        Item::builder()
            .name(self.name)
            .expiry_date(&self.expiry_date)
            .quantity(quantity)
            .build()
    }
}
