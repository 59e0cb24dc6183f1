//! Price codec utilities.
//!
//! # Usage
//!
//! ```bash
//! lychee price encode 1000000     # -> 1.000.000₫
//! lychee price decode 1.000.000₫  # -> 1000000
//! ```

use lychee_core::{PriceCodec, VndCodec};

/// Print the display form of a raw amount.
#[allow(clippy::print_stdout)]
pub fn encode(raw: &str) {
    println!("{}", VndCodec.encode(raw));
}

/// Print the integer value of a display price, or `null` when it does
/// not parse.
#[allow(clippy::print_stdout)]
pub fn decode(display: &str) {
    match VndCodec.decode(display) {
        Some(value) => println!("{value}"),
        None => println!("null"),
    }
}
