//! Color label type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A color label for a product variant.
///
/// The empty string is reserved as the *sentinel* label, meaning "no
/// specific color chosen" - the default variant a product starts with
/// before the author names any real colors. Labels are trimmed on
/// construction, so a whitespace-only input collapses to the sentinel.
///
/// ## Examples
///
/// ```
/// use lychee_core::Color;
///
/// let red = Color::new("Đỏ");
/// assert!(!red.is_sentinel());
/// assert_eq!(red.backref(), Some("Đỏ"));
///
/// let unset = Color::sentinel();
/// assert!(unset.is_sentinel());
/// assert_eq!(unset.backref(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Literal key substituted for the sentinel when it is the sole
    /// color of a finalized variant.
    pub const DEFAULT_KEY: &'static str = "default";

    /// Create a color from a label. The label is trimmed; a blank label
    /// yields the sentinel.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self(label.trim().to_owned())
    }

    /// The sentinel color ("no specific color chosen").
    #[must_use]
    pub const fn sentinel() -> Self {
        Self(String::new())
    }

    /// Whether this is the sentinel color.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the label as a string slice (empty for the sentinel).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Color` and returns its inner label.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The canonical inventory backreference for this color: `None` for
    /// the sentinel, the label otherwise.
    #[must_use]
    pub fn backref(&self) -> Option<&str> {
        if self.is_sentinel() {
            None
        } else {
            Some(self.0.as_str())
        }
    }

    /// Human-readable name for messages: the label, or `"default"` for
    /// the sentinel.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.is_sentinel() {
            Self::DEFAULT_KEY
        } else {
            &self.0
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<&str> for Color {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
