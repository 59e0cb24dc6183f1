//! Core types for Lychee.
//!
//! This module provides type-safe wrappers for the variant-authoring
//! domain concepts.

pub mod color;
pub mod image;
pub mod inventory;
pub mod price;
pub mod review;
pub mod wire;

pub use color::Color;
pub use image::ImageDescriptor;
pub use inventory::{DraftInventory, InventoryLine, SEED_QUANTITY};
pub use price::{PriceCodec, VndCodec};
pub use review::Review;
pub use wire::{GroupRequest, SubmissionPayload};
