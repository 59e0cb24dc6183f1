//! Lychee Authoring - the variant composition engine.
//!
//! Product variants are authored as three parallel, index-aligned
//! collections: an ordered color list, a per-color image gallery, and a
//! per-color inventory ledger. This crate keeps the three consistent
//! through a single mutation surface and turns a finished aggregate into
//! the payloads the creation endpoints accept.
//!
//! # Modules
//!
//! - [`color_list`] - ordered color labels with sentinel handling
//! - [`gallery`] - per-color image galleries, repaired in lock-step
//! - [`ledger`] - per-color inventory rows, repaired in lock-step
//! - [`aggregate`] - the [`aggregate::VariantAggregate`] mutation surface
//! - [`finalize`] - validation and canonicalization into a
//!   [`finalize::FinalizedVariant`]
//! - [`group`] - pending-variant upsert and group-request assembly
//! - [`notify`] - the injected notification seam
//! - [`surface`] - an authoring-surface facade wiring it all together
//!
//! Everything here is synchronous and single-threaded: each authoring
//! surface owns one independent aggregate, every mutation runs to
//! completion before another can be observed, and the only suspension
//! points live with the caller (the network creation calls).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod color_list;
pub mod finalize;
pub mod gallery;
pub mod group;
pub mod ledger;
pub mod notify;
pub mod surface;

pub use aggregate::{EditReport, VariantAggregate};
pub use color_list::{Advisory, ColorEdit, ColorList};
pub use finalize::{ColorPolicy, FinalizeError, FinalizeOptions, FinalizedVariant, Finalizer};
pub use gallery::{Gallery, ImageField};
pub use group::{GroupAssembler, GroupError, Upsert};
pub use ledger::Ledger;
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use surface::AuthoringSurface;
