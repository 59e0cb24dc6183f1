//! Per-color inventory rows, kept index-aligned with the color list.

use lychee_core::{Color, DraftInventory};
use tracing::debug;

/// The inventory ledger: one draft row per color, positionally aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<DraftInventory>,
}

impl Ledger {
    /// An empty ledger; call [`Ledger::reconcile`] to populate it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the ledger to match the color list.
    ///
    /// Rows are reused *by index* so quantity and price edits survive
    /// unrelated color-list changes; indexes beyond the prior length are
    /// seeded fresh. Every row's color backreference is rewritten, which
    /// makes the operation idempotent.
    pub fn reconcile(&mut self, colors: &[Color]) {
        let prior = std::mem::take(&mut self.records);
        let mut prior = prior.into_iter();

        for color in colors {
            let mut record = prior.next().unwrap_or_else(|| {
                debug!(color = %color, "seeding inventory row");
                DraftInventory::seed()
            });
            record.color = color.backref().map(str::to_owned);
            self.records.push(record);
        }
    }

    /// Set a row's quantity from free-text input; non-numeric input
    /// coerces to 0.
    pub fn set_quantity(&mut self, index: usize, raw: &str) -> bool {
        let Some(record) = self.records.get_mut(index) else {
            return false;
        };
        record.quantity = raw.trim().parse().unwrap_or(0);
        true
    }

    /// Store a row's pre-discount price as typed; blank clears it.
    pub fn set_original_price(&mut self, index: usize, raw: &str) -> bool {
        let Some(record) = self.records.get_mut(index) else {
            return false;
        };
        record.original_price = non_blank(raw);
        true
    }

    /// Store a row's selling price as typed; blank clears it.
    pub fn set_current_price(&mut self, index: usize, raw: &str) -> bool {
        let Some(record) = self.records.get_mut(index) else {
            return false;
        };
        record.current_price = non_blank(raw);
        true
    }

    /// The rows, in color-list order.
    #[must_use]
    pub fn records(&self) -> &[DraftInventory] {
        &self.records
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lychee_core::SEED_QUANTITY;

    fn colors(labels: &[&str]) -> Vec<Color> {
        labels.iter().map(|l| Color::new(l)).collect()
    }

    #[test]
    fn test_reconcile_seeds_rows() {
        let mut ledger = Ledger::new();
        ledger.reconcile(&[Color::sentinel()]);
        assert_eq!(ledger.len(), 1);
        let row = &ledger.records()[0];
        assert_eq!(row.quantity, SEED_QUANTITY);
        assert_eq!(row.color, None);
    }

    #[test]
    fn test_reconcile_rewrites_backrefs() {
        let mut ledger = Ledger::new();
        ledger.reconcile(&[Color::sentinel()]);
        ledger.reconcile(&colors(&["Đỏ"]));
        assert_eq!(ledger.records()[0].color.as_deref(), Some("Đỏ"));
    }

    #[test]
    fn test_reconcile_preserves_edits_by_index() {
        let mut ledger = Ledger::new();
        ledger.reconcile(&colors(&["Đỏ"]));
        ledger.set_quantity(0, "5");
        ledger.set_current_price(0, "1.000.000₫");

        ledger.reconcile(&colors(&["Đỏ", "Xanh"]));
        assert_eq!(ledger.records()[0].quantity, 5);
        assert_eq!(ledger.records()[0].current_price.as_deref(), Some("1.000.000₫"));
        assert_eq!(ledger.records()[1].quantity, SEED_QUANTITY);
    }

    #[test]
    fn test_reconcile_idempotent() {
        let list = colors(&["Đỏ", "Xanh"]);
        let mut ledger = Ledger::new();
        ledger.reconcile(&list);
        ledger.set_quantity(1, "12");
        let snapshot = ledger.clone();
        ledger.reconcile(&list);
        assert_eq!(ledger, snapshot);
    }

    #[test]
    fn test_quantity_coerces_non_numeric() {
        let mut ledger = Ledger::new();
        ledger.reconcile(&colors(&["Đỏ"]));
        ledger.set_quantity(0, "abc");
        assert_eq!(ledger.records()[0].quantity, 0);
        ledger.set_quantity(0, " 17 ");
        assert_eq!(ledger.records()[0].quantity, 17);
    }

    #[test]
    fn test_blank_price_clears() {
        let mut ledger = Ledger::new();
        ledger.reconcile(&colors(&["Đỏ"]));
        ledger.set_original_price(0, "500.000₫");
        ledger.set_original_price(0, "  ");
        assert_eq!(ledger.records()[0].original_price, None);
    }

    #[test]
    fn test_out_of_bounds_edit_refused() {
        let mut ledger = Ledger::new();
        ledger.reconcile(&colors(&["Đỏ"]));
        assert!(!ledger.set_quantity(3, "1"));
    }
}
