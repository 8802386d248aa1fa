//! Inventory report rendering.

use serde::Serialize;

use pantry_domain::expiry::{self, ExpiryStatus};
use pantry_domain::item::Item;
use pantry_domain::time::Timestamp;

/// Placeholder shown when an item's expiry date cannot be parsed.
pub const UNKNOWN_DAYS: &str = "unknown";

/// Render the plain-text report for `items`, one block per item in order.
///
/// Each block lists the name, the expiry date, the quantity and the number
/// of days between the expiry date and `now`. A malformed date only
/// affects its own block, which shows [`UNKNOWN_DAYS`].
#[must_use]
pub fn generate(items: &[Item], now: Timestamp) -> String {
    let blocks: Vec<String> = items.iter().map(|item| render_block(item, now)).collect();
    blocks.join("\n")
}

fn render_block(item: &Item, now: Timestamp) -> String {
    let days = match expiry::days_until_expiry(&item.expiry_date, now) {
        Ok(days) => days.to_string(),
        Err(err) => {
            tracing::debug!(item_id = %item.id, error = %err, "expiry date not computable");
            UNKNOWN_DAYS.to_string()
        }
    };

    format!(
        "Nome: {}\nData de Validade: {}\nQuantidade: {}\nDias p/ vencer: {days}\n",
        item.name, item.expiry_date, item.quantity
    )
}

/// An item together with its signed distance to expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemExpiry {
    #[serde(flatten)]
    pub item: Item,
    /// Days until expiry, negative once expired, `None` for unparseable dates.
    pub days_remaining: Option<i64>,
    /// Freshness derived from `days_remaining`, `None` when that is `None`.
    pub status: Option<ExpiryStatus>,
}

/// Pair every item with its signed day count and freshness status.
#[must_use]
pub fn expiry_overview(items: &[Item], now: Timestamp) -> Vec<ItemExpiry> {
    items
        .iter()
        .map(|item| {
            let days_remaining = expiry::signed_days_until_expiry(&item.expiry_date, now).ok();
            ItemExpiry {
                item: item.clone(),
                days_remaining,
                status: days_remaining.map(ExpiryStatus::from_days),
            }
        })
        .collect()
}
