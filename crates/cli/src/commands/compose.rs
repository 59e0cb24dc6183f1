//! Group draft composition.
//!
//! A draft file describes one product group and its variants in JSON.
//! The command replays the draft through the variant engine - the same
//! add/reconcile/finalize path the authoring forms use - so a draft that
//! composes cleanly here is one the forms would accept.
//!
//! ```json
//! {
//!   "labelPrefix": "Lyphone 15",
//!   "brand": "Lychee",
//!   "type": "phone",
//!   "image": "https://cdn.lychee.vn/groups/lyphone-15.jpg",
//!   "config": { "chipset": "L16 Bionic" },
//!   "variants": [
//!     {
//!       "variantLabel": "128GB",
//!       "description": "Bản 128GB",
//!       "colors": [
//!         {
//!           "label": "Đỏ",
//!           "images": [{ "url": "https://cdn.lychee.vn/r.jpg", "title": "đỏ" }],
//!           "quantity": "20",
//!           "currentPrice": "25.000.000₫"
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! An empty or omitted `label` denotes the default (sentinel) color.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use lychee_authoring::{
    AuthoringSurface, ColorPolicy, FinalizeError, FinalizeOptions, FinalizedVariant, GroupError,
    ImageField, TracingNotifier,
};
use lychee_core::{Color, GroupRequest, ImageDescriptor, Review, VndCodec};

/// Errors raised while composing a draft.
#[derive(Debug, Error)]
pub enum DraftError {
    /// The draft file could not be read.
    #[error("failed to read draft file {path}: {source}")]
    Read {
        /// Path as given on the command line.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The draft file is not valid JSON for the draft schema.
    #[error("draft file is not a valid group draft: {0}")]
    Parse(#[from] serde_json::Error),

    /// The draft has no variants.
    #[error("draft has no variants")]
    NoVariants,

    /// A variant failed validation.
    #[error("variant \"{label}\" was rejected: {source}")]
    Rejected {
        /// The variant's label.
        label: String,
        /// The blocking validation error.
        source: FinalizeError,
    },

    /// The group request could not be built.
    #[error(transparent)]
    Group(#[from] GroupError),
}

// =============================================================================
// Draft Schema
// =============================================================================

/// A product group draft.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDraft {
    /// Display prefix shared by all variants.
    pub label_prefix: String,
    /// Group-level brand; variants may omit their own.
    #[serde(default)]
    pub brand: Option<String>,
    /// Product kind.
    #[serde(rename = "type")]
    pub kind: String,
    /// Group listing image.
    #[serde(default)]
    pub image: Option<String>,
    /// Type-specific configuration, flattened into every payload.
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
    /// The variants to compose.
    #[serde(default)]
    pub variants: Vec<VariantDraft>,
}

/// One variant of the group.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDraft {
    /// The variant label (upsert key).
    pub variant_label: String,
    /// Marketing description.
    #[serde(default)]
    pub description: String,
    /// Variant-level brand; falls back to the group brand.
    #[serde(default)]
    pub brand: String,
    /// Colors with their galleries and inventory.
    #[serde(default)]
    pub colors: Vec<ColorDraft>,
    /// Promotion lines.
    #[serde(default)]
    pub promotions: Vec<String>,
    /// Seeded reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// One color row of a variant draft.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDraft {
    /// Color label; blank or omitted for the default color.
    #[serde(default)]
    pub label: String,
    /// Gallery images.
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
    /// Quantity as typed (defaults to the seed quantity).
    #[serde(default)]
    pub quantity: Option<String>,
    /// Pre-discount display price.
    #[serde(default)]
    pub original_price: Option<String>,
    /// Selling display price.
    #[serde(default)]
    pub current_price: Option<String>,
}

/// Composition output: the finalized variants and, when ids were
/// supplied, the group request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeReport {
    /// Finalized variants in draft order.
    pub variants: Vec<FinalizedVariant>,
    /// Group request, when `--ids` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_request: Option<GroupRequest>,
}

// =============================================================================
// Command
// =============================================================================

/// Compose a draft file and print the result as JSON.
///
/// # Errors
///
/// Returns a [`DraftError`] for unreadable/invalid drafts, the first
/// rejected variant, or a group-build failure.
pub fn run(path: &str, lenient: bool, ids: Option<&[String]>, pretty: bool) -> Result<(), DraftError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DraftError::Read {
        path: path.to_owned(),
        source,
    })?;
    let draft: GroupDraft = serde_json::from_str(&raw)?;

    let report = compose(&draft, lenient, ids)?;
    print_report(&report, pretty)?;
    Ok(())
}

/// Replay a draft through the engine.
///
/// # Errors
///
/// See [`run`].
pub fn compose(
    draft: &GroupDraft,
    lenient: bool,
    ids: Option<&[String]>,
) -> Result<ComposeReport, DraftError> {
    if draft.variants.is_empty() {
        return Err(DraftError::NoVariants);
    }

    let policy = if lenient {
        ColorPolicy::Lenient
    } else {
        ColorPolicy::Strict
    };
    let options = FinalizeOptions {
        label_prefix: draft.label_prefix.clone(),
        group_brand: draft.brand.clone(),
        policy,
        config: draft.config.clone(),
    };
    let mut surface = AuthoringSurface::new(
        &draft.kind,
        draft.image.clone(),
        options,
        VndCodec,
        TracingNotifier,
    );

    for variant in &draft.variants {
        replay_variant(&mut surface, variant);
        surface
            .finalize_current()
            .map_err(|source| DraftError::Rejected {
                label: variant.variant_label.clone(),
                source,
            })?;
        info!(label = %variant.variant_label, "variant composed");
    }

    let group_request = match ids {
        Some(ids) => Some(surface.build_group_request(ids)?),
        None => None,
    };

    Ok(ComposeReport {
        variants: surface.assembler().pending().to_vec(),
        group_request,
    })
}

fn replay_variant(
    surface: &mut AuthoringSurface<VndCodec, TracingNotifier>,
    variant: &VariantDraft,
) {
    let colors: Vec<Color> = variant.colors.iter().map(|c| Color::new(&c.label)).collect();

    let aggregate = surface.aggregate_mut();
    aggregate.set_variant_label(&variant.variant_label);
    aggregate.set_description(&variant.description);
    aggregate.set_brand(&variant.brand);
    if !colors.is_empty() {
        aggregate.change_colors(colors.clone());
    }

    for (index, color_draft) in variant.colors.iter().enumerate() {
        let Some(color) = colors.get(index) else {
            break;
        };
        for (slot, image) in color_draft.images.iter().enumerate() {
            if slot > 0 {
                aggregate.add_image(color);
            }
            aggregate.set_image_field(color, slot, ImageField::Url, &image.url);
            aggregate.set_image_field(color, slot, ImageField::Title, &image.title);
        }
        if let Some(quantity) = &color_draft.quantity {
            aggregate.set_quantity(index, quantity);
        }
        if let Some(price) = &color_draft.original_price {
            aggregate.set_original_price(index, price);
        }
        if let Some(price) = &color_draft.current_price {
            aggregate.set_current_price(index, price);
        }
    }

    for promotion in &variant.promotions {
        aggregate.add_promotion(promotion);
    }
    for review in &variant.reviews {
        aggregate.add_review(review.clone());
    }
}

#[allow(clippy::print_stdout)]
fn print_report(report: &ComposeReport, pretty: bool) -> Result<(), serde_json::Error> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{json}");
    Ok(())
}
