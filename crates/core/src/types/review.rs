//! Free-text product review.

use serde::{Deserialize, Serialize};

/// A seeded review attached to a product at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review headline.
    pub title: String,
    /// Review body.
    pub content: String,
}

impl Review {
    /// Create a review from a title and body.
    #[must_use]
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_owned(),
            content: content.to_owned(),
        }
    }
}
