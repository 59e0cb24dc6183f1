//! Per-color image galleries, kept in lock-step with the color list.

use lychee_core::{Color, ImageDescriptor};
use tracing::{debug, warn};

/// Which descriptor field a gallery edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    /// The image URL.
    Url,
    /// The display title.
    Title,
}

/// One color's gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GalleryEntry {
    color: Color,
    images: Vec<ImageDescriptor>,
}

/// Ordered map from color to its gallery of image descriptors.
///
/// Invariant: after [`Gallery::reconcile`], every color in the list has
/// an entry with at least one descriptor, and no entry exists for a
/// removed color. Entries follow color-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// An empty gallery; call [`Gallery::reconcile`] to populate it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repair the gallery against the current color list.
    ///
    /// Entries for colors no longer present are dropped; every color
    /// lacking an entry gets one seeded with a single blank descriptor.
    /// An existing entry - and any images the author already attached -
    /// survives untouched, so the operation is idempotent.
    pub fn reconcile(&mut self, colors: &[Color]) {
        let prior = std::mem::take(&mut self.entries);
        let mut prior: Vec<Option<GalleryEntry>> = prior.into_iter().map(Some).collect();

        for color in colors {
            if self.entries.iter().any(|e| e.color == *color) {
                // duplicate label in the list; one gallery entry serves both
                continue;
            }
            let kept = prior
                .iter_mut()
                .find(|slot| slot.as_ref().is_some_and(|e| e.color == *color))
                .and_then(Option::take);
            match kept {
                Some(entry) => self.entries.push(entry),
                None => {
                    debug!(color = %color, "seeding gallery entry");
                    self.entries.push(GalleryEntry {
                        color: color.clone(),
                        images: vec![ImageDescriptor::empty()],
                    });
                }
            }
        }
    }

    /// Append a blank image slot to a color's gallery.
    pub fn add_image(&mut self, color: &Color) -> bool {
        match self.entry_mut(color) {
            Some(entry) => {
                entry.images.push(ImageDescriptor::empty());
                true
            }
            None => {
                warn!(color = %color, "add_image on unknown color");
                false
            }
        }
    }

    /// Remove one image slot from a color's gallery.
    ///
    /// Refused when it would empty the gallery; a gallery only goes away
    /// through [`Gallery::reconcile`] when its color is removed.
    pub fn remove_image(&mut self, color: &Color, index: usize) -> bool {
        let Some(entry) = self.entry_mut(color) else {
            warn!(color = %color, "remove_image on unknown color");
            return false;
        };
        if entry.images.len() <= 1 {
            warn!(color = %color, "refusing to empty a gallery");
            return false;
        }
        if index >= entry.images.len() {
            return false;
        }
        entry.images.remove(index);
        true
    }

    /// Update one field of one descriptor in place.
    pub fn set_field(&mut self, color: &Color, index: usize, field: ImageField, value: &str) -> bool {
        let Some(image) = self
            .entry_mut(color)
            .and_then(|entry| entry.images.get_mut(index))
        else {
            return false;
        };
        match field {
            ImageField::Url => value.clone_into(&mut image.url),
            ImageField::Title => value.clone_into(&mut image.title),
        }
        true
    }

    /// The images for a color, if it has an entry.
    #[must_use]
    pub fn images(&self, color: &Color) -> Option<&[ImageDescriptor]> {
        self.entries
            .iter()
            .find(|e| e.color == *color)
            .map(|e| e.images.as_slice())
    }

    /// Iterate entries in color-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&Color, &[ImageDescriptor])> {
        self.entries.iter().map(|e| (&e.color, e.images.as_slice()))
    }

    /// Number of gallery entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the gallery has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, color: &Color) -> Option<&mut GalleryEntry> {
        self.entries.iter_mut().find(|e| e.color == *color)
    }
}
