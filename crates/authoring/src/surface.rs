//! Authoring-surface facade.
//!
//! The public and admin product forms share this one type, switched by
//! [`ColorPolicy`] rather than duplicated. It owns the aggregate being
//! edited and the group's pending list, routes advisories and blocking
//! errors to the injected notifier, and resets the aggregate after each
//! successful finalize so the author can start the next variant.

use lychee_core::{GroupRequest, PriceCodec};

use crate::aggregate::{EditReport, VariantAggregate};
use crate::finalize::{FinalizeError, FinalizeOptions, Finalizer};
use crate::group::{GroupAssembler, GroupError};
use crate::notify::Notifier;

/// One authoring session: aggregate + pending group + policy + notifier.
pub struct AuthoringSurface<C, N> {
    aggregate: VariantAggregate,
    assembler: GroupAssembler,
    options: FinalizeOptions,
    codec: C,
    notifier: N,
}

impl<C: PriceCodec, N: Notifier> AuthoringSurface<C, N> {
    /// Open a surface for a product kind, with optional group listing
    /// image, finalize options, a price codec, and a notifier.
    #[must_use]
    pub fn new(
        kind: &str,
        image: Option<String>,
        options: FinalizeOptions,
        codec: C,
        notifier: N,
    ) -> Self {
        Self {
            aggregate: VariantAggregate::new(),
            assembler: GroupAssembler::new(kind, image),
            options,
            codec,
            notifier,
        }
    }

    /// Add a color, routing any advisory to the notifier.
    pub fn add_color(&mut self, label: &str) -> EditReport {
        let report = self.aggregate.add_color(label);
        self.relay_advisory(report);
        report
    }

    /// Remove a color, routing any advisory to the notifier.
    pub fn remove_color(&mut self, index: usize) -> EditReport {
        let report = self.aggregate.remove_color(index);
        self.relay_advisory(report);
        report
    }

    fn relay_advisory(&self, report: EditReport) {
        if let Some(advisory) = report.advisory {
            self.notifier.advisory(advisory.message());
        }
    }

    /// Finalize the current aggregate; on success upsert it into the
    /// pending group and reset the aggregate for the next variant, on
    /// failure surface the single blocking message.
    ///
    /// # Errors
    ///
    /// Returns the first failing validation rule. The aggregate keeps
    /// its state so the author can correct and retry.
    pub fn finalize_current(&mut self) -> Result<(), FinalizeError> {
        let finalizer = Finalizer::new(&self.codec, &self.options);
        match finalizer.finalize(&self.aggregate) {
            Ok(variant) => {
                self.assembler.upsert(variant);
                self.aggregate.reset();
                Ok(())
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Build the group-creation request from the ids the creation calls
    /// returned.
    ///
    /// # Errors
    ///
    /// See [`GroupAssembler::build_group_request`]; the message is also
    /// routed to the notifier.
    pub fn build_group_request(&self, created_ids: &[String]) -> Result<GroupRequest, GroupError> {
        self.assembler.build_group_request(created_ids).inspect_err(|err| {
            self.notifier.error(&err.to_string());
        })
    }

    /// The aggregate being edited.
    #[must_use]
    pub const fn aggregate(&self) -> &VariantAggregate {
        &self.aggregate
    }

    /// Mutable access for edits that raise no advisories (images,
    /// inventory, scalars).
    pub const fn aggregate_mut(&mut self) -> &mut VariantAggregate {
        &mut self.aggregate
    }

    /// The pending group.
    #[must_use]
    pub const fn assembler(&self) -> &GroupAssembler {
        &self.assembler
    }

    /// Mutable access to the pending group (remove/clear).
    pub const fn assembler_mut(&mut self) -> &mut GroupAssembler {
        &mut self.assembler
    }

    /// The surface's notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }
}
