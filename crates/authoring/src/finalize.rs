//! Validation and canonicalization of a finished aggregate.
//!
//! Validation runs the rules in a fixed order and reports exactly one
//! error per attempt - the first failing rule wins, and the aggregate is
//! left untouched for correction. Only a fully valid aggregate is
//! canonicalized: display prices decode to integers, the sentinel color
//! key rewrites to `"default"` when it is the sole color, and blank
//! promotion lines are dropped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use lychee_core::{Color, DraftInventory, ImageDescriptor, InventoryLine, PriceCodec, SubmissionPayload};

use crate::aggregate::VariantAggregate;

/// Minimum-color policy of an authoring surface.
///
/// The admin form historically required two colors once any named color
/// was present; the public form accepted one. One engine serves both,
/// switched by this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// At least 2 colors whenever a named color is present.
    #[default]
    Strict,
    /// A single named color is acceptable.
    Lenient,
}

impl ColorPolicy {
    /// Colors required once at least one named color is present.
    #[must_use]
    pub const fn min_colors_with_named(self) -> usize {
        match self {
            Self::Strict => 2,
            Self::Lenient => 1,
        }
    }
}

/// Caller-supplied context for the finalize transform.
#[derive(Debug, Clone, Default)]
pub struct FinalizeOptions {
    /// Group display prefix; the product name is this plus the variant
    /// label.
    pub label_prefix: String,
    /// Group-level brand; exempts the aggregate's own brand field.
    pub group_brand: Option<String>,
    /// Minimum-color policy of the calling surface.
    pub policy: ColorPolicy,
    /// Type-specific configuration fields, flattened into the payload.
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// Blocking validation errors, one per finalize attempt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinalizeError {
    /// Rule 1: the variant label is blank.
    #[error("enter a variant label")]
    MissingVariantLabel,
    /// Rule 2: no brand on the variant or the group.
    #[error("enter a brand")]
    MissingBrand,
    /// Rule 3: the surface's minimum-color policy is not met.
    #[error("add at least {required} colors before submitting")]
    TooFewColors {
        /// Colors required by the active policy.
        required: usize,
    },
    /// Rule 4: a color has no gallery, an empty gallery, or an
    /// incomplete descriptor.
    #[error("color \"{color}\" needs a url and a title on every image")]
    IncompleteImages {
        /// Display name of the offending color.
        color: String,
    },
    /// Rule 5: the ledger is not index-aligned with the colors.
    #[error("inventory rows ({rows}) do not match colors ({colors})")]
    LengthMismatch {
        /// Ledger row count.
        rows: usize,
        /// Color count.
        colors: usize,
    },
    /// Rule 6: a row's backreference does not match its color.
    #[error("inventory row {index} does not belong to color \"{color}\"")]
    ColorMismatch {
        /// Row index.
        index: usize,
        /// Display name of the expected color.
        color: String,
    },
    /// Rule 6: quantity must be positive.
    #[error("enter a quantity above zero for color \"{color}\"")]
    InvalidQuantity {
        /// Display name of the offending color.
        color: String,
    },
    /// Rule 6: the selling price is missing or not positive.
    #[error("enter a selling price above zero for color \"{color}\"")]
    InvalidCurrentPrice {
        /// Display name of the offending color.
        color: String,
    },
}

/// A validated, canonicalized variant ready for the creation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedVariant {
    /// The user-chosen variant label; the upsert key in the assembler.
    pub variant_label: String,
    /// The product-creation body.
    pub payload: SubmissionPayload,
    /// Canonical inventory rows, aligned with the payload's colors.
    pub inventory: Vec<InventoryLine>,
}

/// The finalize transform over one aggregate.
pub struct Finalizer<'a> {
    codec: &'a dyn PriceCodec,
    options: &'a FinalizeOptions,
}

impl<'a> Finalizer<'a> {
    /// Create a finalizer with a price codec and surface options.
    #[must_use]
    pub const fn new(codec: &'a dyn PriceCodec, options: &'a FinalizeOptions) -> Self {
        Self { codec, options }
    }

    /// Validate the aggregate and, if valid, produce the immutable
    /// submission payload plus canonical inventory.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a [`FinalizeError`]; the
    /// aggregate is never modified.
    #[instrument(skip_all, fields(variant = %aggregate.variant_label()))]
    pub fn finalize(&self, aggregate: &VariantAggregate) -> Result<FinalizedVariant, FinalizeError> {
        let variant_label = aggregate.variant_label().trim();
        if variant_label.is_empty() {
            return Err(FinalizeError::MissingVariantLabel);
        }

        let brand = self.effective_brand(aggregate)?;

        let colors = aggregate.colors();
        self.check_color_policy(colors)?;
        Self::check_images(aggregate, colors)?;

        let rows = aggregate.ledger().records();
        if rows.len() != colors.len() {
            return Err(FinalizeError::LengthMismatch {
                rows: rows.len(),
                colors: colors.len(),
            });
        }

        let sole_sentinel = colors.len() == 1 && colors[0].is_sentinel();
        let inventory = self.canonicalize_inventory(colors, rows, sole_sentinel)?;
        let payload = self.build_payload(aggregate, variant_label, brand, sole_sentinel);

        info!(
            colors = colors.len(),
            rows = inventory.len(),
            "variant finalized"
        );

        Ok(FinalizedVariant {
            variant_label: variant_label.to_owned(),
            payload,
            inventory,
        })
    }

    fn effective_brand(&self, aggregate: &VariantAggregate) -> Result<String, FinalizeError> {
        let own = aggregate.brand().trim();
        if !own.is_empty() {
            return Ok(own.to_owned());
        }
        self.options
            .group_brand
            .as_deref()
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
            .map(str::to_owned)
            .ok_or(FinalizeError::MissingBrand)
    }

    fn check_color_policy(&self, colors: &[Color]) -> Result<(), FinalizeError> {
        let named = colors.iter().filter(|c| !c.is_sentinel()).count();
        if named > 0 {
            let required = self.options.policy.min_colors_with_named();
            if colors.len() < required {
                return Err(FinalizeError::TooFewColors { required });
            }
        }
        Ok(())
    }

    fn check_images(aggregate: &VariantAggregate, colors: &[Color]) -> Result<(), FinalizeError> {
        for color in colors {
            let complete = aggregate
                .images(color)
                .is_some_and(|images| {
                    !images.is_empty() && images.iter().all(ImageDescriptor::is_complete)
                });
            if !complete {
                return Err(FinalizeError::IncompleteImages {
                    color: color.display_name().to_owned(),
                });
            }
        }
        Ok(())
    }

    fn canonicalize_inventory(
        &self,
        colors: &[Color],
        rows: &[DraftInventory],
        sole_sentinel: bool,
    ) -> Result<Vec<InventoryLine>, FinalizeError> {
        colors
            .iter()
            .zip(rows)
            .enumerate()
            .map(|(index, (color, row))| {
                if row.color.as_deref() != color.backref() {
                    return Err(FinalizeError::ColorMismatch {
                        index,
                        color: color.display_name().to_owned(),
                    });
                }
                if row.quantity <= 0 {
                    return Err(FinalizeError::InvalidQuantity {
                        color: color.display_name().to_owned(),
                    });
                }
                let current_price = row
                    .current_price
                    .as_deref()
                    .and_then(|raw| self.codec.decode(raw))
                    .filter(|price| *price > 0)
                    .ok_or_else(|| FinalizeError::InvalidCurrentPrice {
                        color: color.display_name().to_owned(),
                    })?;
                let original_price = row
                    .original_price
                    .as_deref()
                    .and_then(|raw| self.codec.decode(raw));

                Ok(InventoryLine {
                    color: canonical_color(color, sole_sentinel),
                    quantity: row.quantity,
                    original_price,
                    current_price,
                })
            })
            .collect()
    }

    fn build_payload(
        &self,
        aggregate: &VariantAggregate,
        variant_label: &str,
        brand: String,
        sole_sentinel: bool,
    ) -> SubmissionPayload {
        let mut images = BTreeMap::new();
        for (color, gallery) in aggregate.gallery().iter() {
            let key = if sole_sentinel {
                Color::DEFAULT_KEY.to_owned()
            } else {
                color.as_str().to_owned()
            };
            images.insert(key, gallery.to_vec());
        }

        let promotions = aggregate
            .promotions()
            .iter()
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .collect();

        SubmissionPayload {
            product_name: product_name(&self.options.label_prefix, variant_label),
            description: aggregate.description().to_owned(),
            brand,
            images,
            promotions,
            product_reviews: aggregate.reviews().to_vec(),
            config: self.options.config.clone(),
        }
    }
}

/// The canonical inventory color: `"default"` in the sole-sentinel case,
/// otherwise the backreference (named label, or `None` for a sentinel
/// that coexists with named colors).
fn canonical_color(color: &Color, sole_sentinel: bool) -> Option<String> {
    if sole_sentinel {
        Some(Color::DEFAULT_KEY.to_owned())
    } else {
        color.backref().map(str::to_owned)
    }
}

fn product_name(label_prefix: &str, variant_label: &str) -> String {
    let prefix = label_prefix.trim();
    if prefix.is_empty() {
        variant_label.to_owned()
    } else {
        format!("{prefix} {variant_label}")
    }
}
