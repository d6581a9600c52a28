//! Circular preset cursor.
//!
//! A [`Preset`] holds an immutable, non-empty list of items (camera
//! settings, visual styles, reference models) and a cursor that wraps
//! around. Views keep one per named collection and advance it once per
//! user-triggered cycle action.
//!
//! # Example
//!
//! ```rust
//! use gamut_core::Preset;
//!
//! let mut styles = Preset::new(vec!["solid", "wireframe", "points"]).unwrap();
//! assert_eq!(*styles.current(), "solid");
//! assert_eq!(*styles.advance(), "wireframe");
//! assert_eq!(*styles.advance(), "points");
//! assert_eq!(*styles.advance(), "solid");
//! ```
//!
//! `advance` is a read-modify-write on the cursor; a preset shared between
//! threads needs external locking.

use serde::Deserialize;
use tracing::trace;

use crate::{Error, Result};

/// Circular cursor over a fixed list of presets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Preset<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T> Preset<T> {
    /// Creates a preset positioned on the first item.
    ///
    /// Fails with a configuration error when `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::configuration("preset list must not be empty"));
        }
        Ok(Self { items, cursor: 0 })
    }

    /// Returns the item under the cursor without moving it.
    #[inline]
    pub fn current(&self) -> &T {
        &self.items[self.cursor]
    }

    /// Moves the cursor forward (wrapping) and returns the new current item.
    pub fn advance(&mut self) -> &T {
        self.cursor = (self.cursor + 1) % self.items.len();
        trace!(cursor = self.cursor, len = self.items.len(), "preset advance");
        &self.items[self.cursor]
    }

    /// Cursor position.
    #[inline]
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Number of presets; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`, presets cannot be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All items in their original order.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Endless iterator yielding the current item and then advancing.
    ///
    /// Unlike [`Preset::advance`], the first item produced is the one
    /// currently under the cursor.
    pub fn iter_cycle(&mut self) -> PresetCycle<'_, T> {
        PresetCycle { preset: self }
    }
}

impl<T> TryFrom<Vec<T>> for Preset<T> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::new(items)
    }
}

/// Iterator returned by [`Preset::iter_cycle`].
#[derive(Debug)]
pub struct PresetCycle<'a, T> {
    preset: &'a mut Preset<T>,
}

impl<T: Clone> Iterator for PresetCycle<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.preset.current().clone();
        self.preset.advance();
        Some(item)
    }
}
