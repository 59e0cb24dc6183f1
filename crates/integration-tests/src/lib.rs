//! Integration tests for Lychee.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lychee-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `variant_editing` - aggregate alignment invariants and edit
//!   scenarios
//! - `finalize_and_group` - canonicalization, policy strictness, and
//!   group assembly
//! - `price_codec` - display price round-trips
