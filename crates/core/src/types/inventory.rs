//! Inventory records, in their editing and canonical shapes.

use serde::{Deserialize, Serialize};

/// Quantity seeded into a freshly created inventory row.
pub const SEED_QUANTITY: i32 = 30;

/// An inventory row as it exists while a variant is being edited.
///
/// Prices are kept as the display strings the author typed (for example
/// `"1.000.000₫"`); they are decoded to integers only when the variant
/// is finalized. `color` is `None` exactly when the row belongs to the
/// sentinel color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftInventory {
    /// Backreference to the owning color (`None` for the sentinel).
    pub color: Option<String>,
    /// Units in stock.
    pub quantity: i32,
    /// Pre-discount price as typed, if any.
    pub original_price: Option<String>,
    /// Selling price as typed, if any.
    pub current_price: Option<String>,
}

impl DraftInventory {
    /// A fresh row for a newly added color.
    #[must_use]
    pub const fn seed() -> Self {
        Self {
            color: None,
            quantity: SEED_QUANTITY,
            original_price: None,
            current_price: None,
        }
    }
}

impl Default for DraftInventory {
    fn default() -> Self {
        Self::seed()
    }
}

/// A canonical inventory row, produced by the finalize transform.
///
/// `color` carries the named color label, the literal `"default"` in the
/// sole-sentinel case, or `None` for a sentinel that coexists with named
/// colors. Prices are integer đồng amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLine {
    /// Canonical color key.
    pub color: Option<String>,
    /// Units in stock, validated positive.
    pub quantity: i32,
    /// Pre-discount price, if one was entered.
    pub original_price: Option<i64>,
    /// Selling price, validated positive.
    pub current_price: i64,
}
