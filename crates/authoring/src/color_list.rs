//! Ordered color list with sentinel handling.
//!
//! The list is never empty: a variant starts with the sentinel ("no
//! specific color") and the first real color *replaces* it in place, so
//! the common no-color-to-one-color transition keeps single-entry
//! cardinality. Duplicates are tolerated here; downstream validation
//! rejects them only if they break index alignment.

use lychee_core::Color;
use tracing::warn;

/// Outcome of a color-list edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorEdit {
    /// The label replaced the sole sentinel entry in place.
    ReplacedSentinel,
    /// The label was appended to the list.
    Appended,
    /// The entry at the index was removed.
    Removed,
    /// The edit was refused; the list is unchanged.
    Refused,
    /// Blank input; nothing to do.
    Ignored,
}

impl ColorEdit {
    /// Whether the edit changed the list.
    #[must_use]
    pub const fn applied(self) -> bool {
        matches!(self, Self::ReplacedSentinel | Self::Appended | Self::Removed)
    }
}

/// Transient, non-blocking advisory raised by color edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Exactly one named color is present; variants read better with two.
    AddAnotherColor,
}

impl Advisory {
    /// The human-readable advisory text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        "add at least one more color"
    }
}

/// The ordered list of color labels for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorList {
    colors: Vec<Color>,
}

impl ColorList {
    /// A seeded list holding exactly one sentinel entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: vec![Color::sentinel()],
        }
    }

    /// Seed the list with a sentinel if it is empty.
    pub fn initialize(&mut self) {
        if self.colors.is_empty() {
            self.colors.push(Color::sentinel());
        }
    }

    /// Replace the whole list. An empty input is re-seeded with the
    /// sentinel.
    pub fn set(&mut self, colors: Vec<Color>) {
        self.colors = colors;
        self.initialize();
    }

    /// Add a color label.
    ///
    /// The label is trimmed; blank input is ignored. If the list holds
    /// the sentinel and no named color yet, the new label replaces the
    /// sentinel at its index instead of appending.
    pub fn add(&mut self, label: &str) -> ColorEdit {
        let color = Color::new(label);
        if color.is_sentinel() {
            return ColorEdit::Ignored;
        }

        if self.named_count() == 0
            && let Some(slot) = self.colors.iter_mut().find(|c| c.is_sentinel())
        {
            *slot = color;
            return ColorEdit::ReplacedSentinel;
        }

        self.colors.push(color);
        ColorEdit::Appended
    }

    /// Remove the color at `index`.
    ///
    /// Refused when the target is the sentinel and it is the only entry
    /// left (a variant cannot lose its last color). If the removal
    /// leaves neither a named color nor a sentinel, a sentinel is
    /// re-inserted.
    pub fn remove(&mut self, index: usize) -> ColorEdit {
        let Some(target) = self.colors.get(index) else {
            warn!(index, "color removal out of bounds");
            return ColorEdit::Refused;
        };

        if target.is_sentinel() && self.named_count() == 0 && self.colors.len() == 1 {
            warn!("refusing to remove the last remaining color");
            return ColorEdit::Refused;
        }

        self.colors.remove(index);
        self.initialize();
        ColorEdit::Removed
    }

    /// The advisory warranted by the current state, if any: exactly one
    /// named color present.
    #[must_use]
    pub fn advisory(&self) -> Option<Advisory> {
        (self.named_count() == 1).then_some(Advisory::AddAnotherColor)
    }

    /// The colors, in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Count of non-sentinel colors.
    #[must_use]
    pub fn named_count(&self) -> usize {
        self.colors.iter().filter(|c| !c.is_sentinel()).count()
    }

    /// Whether a sentinel entry is present.
    #[must_use]
    pub fn has_sentinel(&self) -> bool {
        self.colors.iter().any(Color::is_sentinel)
    }

    /// Number of entries (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorList {
    fn default() -> Self {
        Self::new()
    }
}
