//! Integration tests for the đồng price codec.

use lychee_core::{PriceCodec, VndCodec};

// =============================================================================
// Round-Trip
// =============================================================================

#[test]
fn test_round_trip_non_negative_integers() {
    let codec = VndCodec;
    for value in [0_i64, 1, 42, 999, 1_000, 45_000, 999_999, 1_000_000, 25_000_000] {
        let raw = value.to_string();
        let display = codec.encode(&raw);
        assert_eq!(codec.decode(&display), Some(value), "round-trip of {raw}");
    }
}

// =============================================================================
// Decode Tolerance
// =============================================================================

#[test]
fn test_decode_accepts_varied_display_forms() {
    let codec = VndCodec;
    assert_eq!(codec.decode("1.000.000₫"), Some(1_000_000));
    assert_eq!(codec.decode("1,000,000"), Some(1_000_000));
    assert_eq!(codec.decode("  45.000 ₫ "), Some(45_000));
    assert_eq!(codec.decode("45000"), Some(45_000));
}

#[test]
fn test_decode_rejects_blank_and_garbage() {
    let codec = VndCodec;
    assert_eq!(codec.decode(""), None);
    assert_eq!(codec.decode("   "), None);
    assert_eq!(codec.decode("₫"), None);
    assert_eq!(codec.decode("liên hệ"), None);
}

// =============================================================================
// Encode Shape
// =============================================================================

#[test]
fn test_encode_grouping() {
    let codec = VndCodec;
    assert_eq!(codec.encode("999"), "999₫");
    assert_eq!(codec.encode("1000"), "1.000₫");
    assert_eq!(codec.encode("1000000"), "1.000.000₫");
}
