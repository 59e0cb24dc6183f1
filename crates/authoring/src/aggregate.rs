//! The variant aggregate: one editable unit composing colors, galleries,
//! inventory, and the scalar product fields.

use lychee_core::{Color, ImageDescriptor, Review};

use crate::color_list::{Advisory, ColorEdit, ColorList};
use crate::gallery::{Gallery, ImageField};
use crate::ledger::Ledger;

/// Report returned by color-list mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditReport {
    /// What the edit did to the list.
    pub edit: ColorEdit,
    /// Advisory warranted by the post-edit state, if the edit applied.
    pub advisory: Option<Advisory>,
}

/// One product variant being authored.
///
/// The three parallel collections are only reachable through this type,
/// so their alignment is enforced by construction: every color-list
/// mutation repairs the gallery and the ledger before returning, and no
/// caller can observe the collections out of sync.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantAggregate {
    colors: ColorList,
    gallery: Gallery,
    ledger: Ledger,
    variant_label: String,
    description: String,
    brand: String,
    promotions: Vec<String>,
    reviews: Vec<Review>,
}

impl VariantAggregate {
    /// A seeded aggregate: one sentinel color, one blank image slot, one
    /// seeded inventory row.
    #[must_use]
    pub fn new() -> Self {
        let colors = ColorList::new();
        let mut gallery = Gallery::new();
        let mut ledger = Ledger::new();
        gallery.reconcile(colors.colors());
        ledger.reconcile(colors.colors());
        Self {
            colors,
            gallery,
            ledger,
            variant_label: String::new(),
            description: String::new(),
            brand: String::new(),
            promotions: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Discard all edits and return to the seeded state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // =========================================================================
    // Color mutations (cascade into gallery + ledger)
    // =========================================================================

    /// Add a color label; see [`ColorList::add`].
    pub fn add_color(&mut self, label: &str) -> EditReport {
        let edit = self.colors.add(label);
        self.after_color_edit(edit)
    }

    /// Remove the color at `index`; see [`ColorList::remove`].
    pub fn remove_color(&mut self, index: usize) -> EditReport {
        let edit = self.colors.remove(index);
        self.after_color_edit(edit)
    }

    /// Replace the whole color list, then repair. Returns the advisory
    /// warranted by the new state, if any.
    pub fn change_colors(&mut self, colors: Vec<Color>) -> Option<Advisory> {
        self.colors.set(colors);
        self.repair();
        self.colors.advisory()
    }

    fn after_color_edit(&mut self, edit: ColorEdit) -> EditReport {
        if edit.applied() {
            self.repair();
        }
        EditReport {
            edit,
            advisory: edit.applied().then(|| self.colors.advisory()).flatten(),
        }
    }

    fn repair(&mut self) {
        self.gallery.reconcile(self.colors.colors());
        self.ledger.reconcile(self.colors.colors());
    }

    // =========================================================================
    // Gallery mutations
    // =========================================================================

    /// Append a blank image slot to a color's gallery.
    pub fn add_image(&mut self, color: &Color) -> bool {
        self.gallery.add_image(color)
    }

    /// Remove an image slot; never empties a live color's gallery.
    pub fn remove_image(&mut self, color: &Color, index: usize) -> bool {
        self.gallery.remove_image(color, index)
    }

    /// Update one descriptor field in place.
    pub fn set_image_field(
        &mut self,
        color: &Color,
        index: usize,
        field: ImageField,
        value: &str,
    ) -> bool {
        self.gallery.set_field(color, index, field, value)
    }

    // =========================================================================
    // Inventory mutations
    // =========================================================================

    /// Set a row's quantity from free text; non-numeric coerces to 0.
    pub fn set_quantity(&mut self, index: usize, raw: &str) -> bool {
        self.ledger.set_quantity(index, raw)
    }

    /// Store a row's pre-discount price as typed.
    pub fn set_original_price(&mut self, index: usize, raw: &str) -> bool {
        self.ledger.set_original_price(index, raw)
    }

    /// Store a row's selling price as typed.
    pub fn set_current_price(&mut self, index: usize, raw: &str) -> bool {
        self.ledger.set_current_price(index, raw)
    }

    // =========================================================================
    // Scalar fields
    // =========================================================================

    /// Set the variant label (e.g. "128GB").
    pub fn set_variant_label(&mut self, label: &str) {
        label.clone_into(&mut self.variant_label);
    }

    /// Set the marketing description.
    pub fn set_description(&mut self, description: &str) {
        description.clone_into(&mut self.description);
    }

    /// Set the brand name.
    pub fn set_brand(&mut self, brand: &str) {
        brand.clone_into(&mut self.brand);
    }

    /// Append a promotion line.
    pub fn add_promotion(&mut self, promotion: &str) {
        self.promotions.push(promotion.to_owned());
    }

    /// Overwrite a promotion line.
    pub fn set_promotion(&mut self, index: usize, promotion: &str) -> bool {
        match self.promotions.get_mut(index) {
            Some(slot) => {
                promotion.clone_into(slot);
                true
            }
            None => false,
        }
    }

    /// Remove a promotion line.
    pub fn remove_promotion(&mut self, index: usize) -> bool {
        if index < self.promotions.len() {
            self.promotions.remove(index);
            true
        } else {
            false
        }
    }

    /// Append a seeded review.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Remove a seeded review.
    pub fn remove_review(&mut self, index: usize) -> bool {
        if index < self.reviews.len() {
            self.reviews.remove(index);
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The colors, in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        self.colors.colors()
    }

    /// The color list itself.
    #[must_use]
    pub const fn color_list(&self) -> &ColorList {
        &self.colors
    }

    /// The image galleries.
    #[must_use]
    pub const fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// The inventory ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The variant label as typed.
    #[must_use]
    pub fn variant_label(&self) -> &str {
        &self.variant_label
    }

    /// The description as typed.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The brand as typed.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// The promotion lines as typed (blanks included).
    #[must_use]
    pub fn promotions(&self) -> &[String] {
        &self.promotions
    }

    /// The seeded reviews.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Convenience for tests and surfaces: the gallery images of one
    /// color.
    #[must_use]
    pub fn images(&self, color: &Color) -> Option<&[ImageDescriptor]> {
        self.gallery.images(color)
    }
}

impl Default for VariantAggregate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_aligned(aggregate: &VariantAggregate) {
        assert_eq!(aggregate.ledger().len(), aggregate.colors().len());
        for (i, color) in aggregate.colors().iter().enumerate() {
            assert_eq!(
                aggregate.ledger().records()[i].color.as_deref(),
                color.backref(),
                "row {i} out of alignment"
            );
            assert!(aggregate.images(color).is_some_and(|imgs| !imgs.is_empty()));
        }
    }

    #[test]
    fn test_seeded_state() {
        let aggregate = VariantAggregate::new();
        assert_eq!(aggregate.colors().len(), 1);
        assert!(aggregate.colors()[0].is_sentinel());
        assert_aligned(&aggregate);
    }

    #[test]
    fn test_add_color_repairs_all_three() {
        let mut aggregate = VariantAggregate::new();
        let report = aggregate.add_color("Đỏ");
        assert_eq!(report.edit, ColorEdit::ReplacedSentinel);
        assert_eq!(report.advisory, Some(Advisory::AddAnotherColor));
        assert_aligned(&aggregate);
    }

    #[test]
    fn test_second_color_clears_advisory() {
        let mut aggregate = VariantAggregate::new();
        aggregate.add_color("Đỏ");
        let report = aggregate.add_color("Xanh");
        assert_eq!(report.edit, ColorEdit::Appended);
        assert_eq!(report.advisory, None);
        assert_aligned(&aggregate);
    }

    #[test]
    fn test_refused_remove_reports_no_advisory() {
        let mut aggregate = VariantAggregate::new();
        let report = aggregate.remove_color(0);
        assert_eq!(report.edit, ColorEdit::Refused);
        assert_eq!(report.advisory, None);
        assert_aligned(&aggregate);
    }

    #[test]
    fn test_remove_color_drops_gallery_and_row() {
        let mut aggregate = VariantAggregate::new();
        aggregate.add_color("Đỏ");
        aggregate.add_color("Xanh");
        aggregate.remove_color(1);
        assert!(aggregate.images(&Color::new("Xanh")).is_none());
        assert_aligned(&aggregate);
    }

    #[test]
    fn test_change_colors_is_atomic_repair() {
        let mut aggregate = VariantAggregate::new();
        aggregate.change_colors(vec![Color::sentinel(), Color::new("Đỏ")]);
        assert_eq!(aggregate.colors().len(), 2);
        assert_aligned(&aggregate);
    }

    #[test]
    fn test_inventory_edits_survive_color_append() {
        let mut aggregate = VariantAggregate::new();
        aggregate.add_color("Đỏ");
        aggregate.set_quantity(0, "5");
        aggregate.set_current_price(0, "1.000.000₫");
        aggregate.add_color("Xanh");
        assert_eq!(aggregate.ledger().records()[0].quantity, 5);
        assert_aligned(&aggregate);
    }

    #[test]
    fn test_promotion_bounds() {
        let mut aggregate = VariantAggregate::new();
        aggregate.add_promotion("Tặng ốp lưng");
        assert!(aggregate.set_promotion(0, "Tặng sạc nhanh"));
        assert!(!aggregate.set_promotion(3, "x"));
        assert!(aggregate.remove_promotion(0));
        assert!(!aggregate.remove_promotion(0));
    }

    #[test]
    fn test_reset_returns_to_seed() {
        let mut aggregate = VariantAggregate::new();
        aggregate.add_color("Đỏ");
        aggregate.set_variant_label("128GB");
        aggregate.reset();
        assert_eq!(aggregate, VariantAggregate::new());
    }
}
