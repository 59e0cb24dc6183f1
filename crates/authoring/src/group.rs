//! Pending finalized variants and group-request assembly.

use thiserror::Error;
use tracing::{info, instrument};

use lychee_core::GroupRequest;

use crate::finalize::FinalizedVariant;

/// What an upsert did to the pending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new label; the variant was appended.
    Appended,
    /// The label existed; its entry was replaced whole.
    Replaced,
}

/// Errors raised while building the group request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// The pending list is empty.
    #[error("no finalized variants to submit")]
    Empty,
    /// The creation call returned a different number of ids than there
    /// are pending variants.
    #[error("created id count ({ids}) does not match pending variant count ({pending})")]
    IdCountMismatch {
        /// Ids supplied by the caller.
        ids: usize,
        /// Variants pending.
        pending: usize,
    },
}

/// Collects finalized variants keyed by variant label and assembles the
/// group-creation request.
///
/// The assembler owns its entries: re-submitting a label replaces the
/// whole entry, never merges fields. External-call failures are the
/// caller's to handle - the pending list stays intact so a retry does
/// not re-enter data.
#[derive(Debug, Clone)]
pub struct GroupAssembler {
    kind: String,
    image: Option<String>,
    pending: Vec<FinalizedVariant>,
}

impl GroupAssembler {
    /// Create an assembler for a product kind and optional group listing
    /// image.
    #[must_use]
    pub fn new(kind: &str, image: Option<String>) -> Self {
        Self {
            kind: kind.to_owned(),
            image,
            pending: Vec::new(),
        }
    }

    /// Insert a finalized variant, replacing any pending entry with the
    /// same variant label.
    pub fn upsert(&mut self, variant: FinalizedVariant) -> Upsert {
        if let Some(slot) = self
            .pending
            .iter_mut()
            .find(|v| v.variant_label == variant.variant_label)
        {
            info!(label = %variant.variant_label, "replacing pending variant");
            *slot = variant;
            Upsert::Replaced
        } else {
            info!(label = %variant.variant_label, "appending pending variant");
            self.pending.push(variant);
            Upsert::Appended
        }
    }

    /// Drop the pending entry with this label, if any.
    pub fn remove(&mut self, variant_label: &str) -> bool {
        let before = self.pending.len();
        self.pending.retain(|v| v.variant_label != variant_label);
        self.pending.len() != before
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// The pending variants, in submission order.
    #[must_use]
    pub fn pending(&self) -> &[FinalizedVariant] {
        &self.pending
    }

    /// Number of pending variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Assemble the group-creation request from the ids the creation
    /// calls returned, one per pending variant in the same order.
    ///
    /// Group-level default prices and colors come from each variant's
    /// first inventory row.
    ///
    /// # Errors
    ///
    /// [`GroupError::Empty`] with nothing pending;
    /// [`GroupError::IdCountMismatch`] when `created_ids` is not aligned
    /// with the pending list.
    #[instrument(skip_all, fields(kind = %self.kind, pending = self.pending.len()))]
    pub fn build_group_request(&self, created_ids: &[String]) -> Result<GroupRequest, GroupError> {
        if self.pending.is_empty() {
            return Err(GroupError::Empty);
        }
        if created_ids.len() != self.pending.len() {
            return Err(GroupError::IdCountMismatch {
                ids: created_ids.len(),
                pending: self.pending.len(),
            });
        }

        let mut request = GroupRequest {
            product_ids: created_ids.to_vec(),
            image: self.image.clone(),
            kind: self.kind.clone(),
            variants: Vec::with_capacity(self.pending.len()),
            product_names: Vec::with_capacity(self.pending.len()),
            default_original_prices: Vec::with_capacity(self.pending.len()),
            default_current_prices: Vec::with_capacity(self.pending.len()),
            default_colors: Some(Vec::with_capacity(self.pending.len())),
        };

        for variant in &self.pending {
            request.variants.push(variant.variant_label.clone());
            request
                .product_names
                .push(variant.payload.product_name.clone());

            let first = variant.inventory.first();
            request
                .default_original_prices
                .push(first.and_then(|row| row.original_price));
            request
                .default_current_prices
                .push(first.map(|row| row.current_price));
            if let Some(colors) = request.default_colors.as_mut() {
                colors.push(first.and_then(|row| row.color.clone()));
            }
        }

        info!(variants = request.variants.len(), "group request built");
        Ok(request)
    }
}
