//! Lychee Core - Shared types library.
//!
//! This crate provides common types used across all Lychee components:
//! - `authoring` - The variant composition engine
//! - `cli` - Command-line tools for composing and validating drafts
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no network
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Color labels, image descriptors, inventory records,
//!   price codec, and the submission/group wire types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
