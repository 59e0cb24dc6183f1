//! Wire types for the product- and group-creation calls.
//!
//! These are the exact payload shapes the creation endpoints accept.
//! All arrays within one payload or request are positionally aligned by
//! variant/color index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::image::ImageDescriptor;
use crate::types::review::Review;

// =============================================================================
// Product Creation
// =============================================================================

/// The canonicalized body of a product-creation call.
///
/// `images` is keyed by canonical color key: the named label, or the
/// literal `"default"` when the variant has only the sentinel color.
/// Type-specific configuration fields (screen size, chipset, material,
/// and so on) ride along flattened into the top-level object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Full product name: group label prefix + variant label.
    pub product_name: String,
    /// Marketing description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Canonical color key -> gallery images.
    pub images: BTreeMap<String, Vec<ImageDescriptor>>,
    /// Promotion lines, blanks removed.
    pub promotions: Vec<String>,
    /// Seeded reviews.
    pub product_reviews: Vec<Review>,
    /// Type-specific configuration, flattened into the payload.
    #[serde(flatten)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

// =============================================================================
// Group Creation
// =============================================================================

/// The body of a group-creation call.
///
/// Parallel arrays, one slot per variant, in the order the variants were
/// finalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    /// Ids returned by the per-variant creation calls.
    pub product_ids: Vec<String>,
    /// Listing image for the whole group.
    pub image: Option<String>,
    /// Product kind (e.g. "phone", "tablet").
    #[serde(rename = "type")]
    pub kind: String,
    /// Variant labels (e.g. "128GB").
    pub variants: Vec<String>,
    /// Full product names, aligned with `variants`.
    pub product_names: Vec<String>,
    /// Pre-discount price of each variant's first inventory row.
    pub default_original_prices: Vec<Option<i64>>,
    /// Selling price of each variant's first inventory row.
    pub default_current_prices: Vec<Option<i64>>,
    /// Canonical color of each variant's first inventory row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_colors: Option<Vec<Option<String>>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_field_names() {
        let mut payload = SubmissionPayload {
            product_name: "Lypad Air 128GB".to_owned(),
            description: "Mỏng nhẹ".to_owned(),
            brand: "Lychee".to_owned(),
            ..Default::default()
        };
        payload.images.insert(
            "default".to_owned(),
            vec![ImageDescriptor::new("https://cdn.lychee.vn/a.jpg", "front")],
        );
        payload
            .config
            .insert("screenSize".to_owned(), serde_json::json!("10.9 inch"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["productName"], "Lypad Air 128GB");
        assert!(json["images"]["default"].is_array());
        assert!(json["productReviews"].is_array());
        // flattened config sits at the top level
        assert_eq!(json["screenSize"], "10.9 inch");
    }

    #[test]
    fn test_group_request_field_names() {
        let request = GroupRequest {
            product_ids: vec!["p1".to_owned()],
            image: None,
            kind: "phone".to_owned(),
            variants: vec!["128GB".to_owned()],
            product_names: vec!["Lyphone 15 128GB".to_owned()],
            default_original_prices: vec![None],
            default_current_prices: vec![Some(25_000_000)],
            default_colors: Some(vec![Some("Đỏ".to_owned())]),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "phone");
        assert_eq!(json["productIds"][0], "p1");
        assert_eq!(json["defaultCurrentPrices"][0], 25_000_000);
        assert_eq!(json["defaultColors"][0], "Đỏ");
    }

    #[test]
    fn test_group_request_omits_absent_colors() {
        let request = GroupRequest {
            kind: "tablet".to_owned(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("defaultColors").is_none());
    }
}
