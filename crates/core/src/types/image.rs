//! Gallery image descriptor.

use serde::{Deserialize, Serialize};

/// One image in a color's gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Image URL.
    pub url: String,
    /// Display title / alt text.
    pub title: String,
}

impl ImageDescriptor {
    /// Create a descriptor from a url and title.
    #[must_use]
    pub fn new(url: &str, title: &str) -> Self {
        Self {
            url: url.to_owned(),
            title: title.to_owned(),
        }
    }

    /// A blank slot awaiting author input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A descriptor is complete once both fields carry non-blank text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.url.trim().is_empty() && !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_incomplete() {
        assert!(!ImageDescriptor::empty().is_complete());
    }

    #[test]
    fn test_blank_title_is_incomplete() {
        let image = ImageDescriptor::new("https://cdn.lychee.vn/p/1.jpg", "  ");
        assert!(!image.is_complete());
    }

    #[test]
    fn test_complete() {
        let image = ImageDescriptor::new("https://cdn.lychee.vn/p/1.jpg", "front");
        assert!(image.is_complete());
    }
}
