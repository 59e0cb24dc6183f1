//! Integration tests for variant editing.
//!
//! These cover the alignment invariant across the three parallel
//! collections and the sentinel-handling scenarios of the color list.

use lychee_authoring::{Advisory, ColorEdit, VariantAggregate};
use lychee_core::Color;

// =============================================================================
// Alignment Invariant
// =============================================================================

fn assert_aligned(aggregate: &VariantAggregate) {
    assert_eq!(
        aggregate.ledger().len(),
        aggregate.colors().len(),
        "ledger out of alignment"
    );
    for (i, color) in aggregate.colors().iter().enumerate() {
        assert_eq!(
            aggregate.ledger().records()[i].color.as_deref(),
            color.backref(),
            "row {i} backreference out of alignment"
        );
        assert!(
            aggregate
                .images(color)
                .is_some_and(|images| !images.is_empty()),
            "color {color} has no gallery"
        );
    }
}

#[test]
fn test_invariant_holds_across_edit_sequence() {
    let mut aggregate = VariantAggregate::new();
    assert_aligned(&aggregate);

    aggregate.add_color("Đỏ");
    assert_aligned(&aggregate);

    aggregate.add_color("Xanh");
    aggregate.add_color("Vàng");
    assert_aligned(&aggregate);

    aggregate.remove_color(1);
    assert_aligned(&aggregate);

    aggregate.change_colors(vec![Color::sentinel(), Color::new("Tím")]);
    assert_aligned(&aggregate);

    aggregate.remove_color(0);
    aggregate.remove_color(0);
    assert_aligned(&aggregate);
}

#[test]
fn test_color_list_never_empty() {
    let mut aggregate = VariantAggregate::new();
    aggregate.add_color("Đỏ");
    aggregate.remove_color(0);
    assert_eq!(aggregate.colors().len(), 1);
    assert!(aggregate.colors()[0].is_sentinel());

    aggregate.change_colors(Vec::new());
    assert_eq!(aggregate.colors().len(), 1);
    assert!(aggregate.colors()[0].is_sentinel());
}

// =============================================================================
// Scenario A: first real color replaces the sentinel
// =============================================================================

#[test]
fn test_first_color_replaces_sentinel_and_advises() {
    let mut aggregate = VariantAggregate::new();
    assert_eq!(aggregate.colors(), &[Color::sentinel()]);

    let report = aggregate.add_color("Đỏ");
    assert_eq!(report.edit, ColorEdit::ReplacedSentinel);
    assert_eq!(report.advisory, Some(Advisory::AddAnotherColor));
    assert_eq!(aggregate.colors(), &[Color::new("Đỏ")]);
}

// =============================================================================
// Scenario B: second color appends, advisory clears
// =============================================================================

#[test]
fn test_second_color_appends_and_clears_advisory() {
    let mut aggregate = VariantAggregate::new();
    aggregate.add_color("Đỏ");

    let report = aggregate.add_color("Xanh");
    assert_eq!(report.edit, ColorEdit::Appended);
    assert_eq!(report.advisory, None);
    assert_eq!(aggregate.colors(), &[Color::new("Đỏ"), Color::new("Xanh")]);
}

// =============================================================================
// Scenario C: the last color cannot be removed
// =============================================================================

#[test]
fn test_sole_sentinel_removal_is_noop() {
    let mut aggregate = VariantAggregate::new();
    let report = aggregate.remove_color(0);
    assert_eq!(report.edit, ColorEdit::Refused);
    assert_eq!(aggregate.colors(), &[Color::sentinel()]);
    assert_aligned(&aggregate);
}

// =============================================================================
// Edit Preservation
// =============================================================================

#[test]
fn test_gallery_and_ledger_edits_survive_unrelated_changes() {
    use lychee_authoring::ImageField;

    let mut aggregate = VariantAggregate::new();
    aggregate.add_color("Đỏ");
    let red = Color::new("Đỏ");
    aggregate.set_image_field(&red, 0, ImageField::Url, "https://cdn.lychee.vn/r.jpg");
    aggregate.set_image_field(&red, 0, ImageField::Title, "đỏ");
    aggregate.set_quantity(0, "7");
    aggregate.set_current_price(0, "2.000.000₫");

    aggregate.add_color("Xanh");
    aggregate.add_color("Vàng");
    aggregate.remove_color(2);

    let images = aggregate.images(&red).expect("red gallery");
    assert_eq!(images[0].url, "https://cdn.lychee.vn/r.jpg");
    assert_eq!(aggregate.ledger().records()[0].quantity, 7);
    assert_eq!(
        aggregate.ledger().records()[0].current_price.as_deref(),
        Some("2.000.000₫")
    );
    assert_aligned(&aggregate);
}

// =============================================================================
// Reconcile Idempotence
// =============================================================================

#[test]
fn test_change_colors_twice_is_stable() {
    let mut aggregate = VariantAggregate::new();
    let colors = vec![Color::new("Đỏ"), Color::new("Xanh")];
    aggregate.change_colors(colors.clone());
    let snapshot = aggregate.clone();
    aggregate.change_colors(colors);
    assert_eq!(aggregate, snapshot);
}
