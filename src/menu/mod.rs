//! Single-level selection menu: model, scrolling, painting and the
//! encoder-driven session loop.
//!
//! ## Components
//!
//! - **Model** ([`Menu`]): title plus navigable entries, indexed from 1
//! - **Viewport** ([`Viewport`]): which entries are on screen
//! - **Renderer** ([`Renderer`]): full paint and minimal window repaints
//! - **Session** ([`EncoderMenu`]): polls input until a button outcome

pub mod render;
pub mod session;
pub mod viewport;


pub use render::{MenuState, Palette, Renderer};
pub use session::{EncoderMenu, Selection};
pub use viewport::Viewport;

use crate::error::Error;

/// One row of a menu table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuEntry<'a> {
    /// Text shown on the display.
    pub label: &'a str,
    /// Returned to the caller when this entry is picked.
    pub value: i32,
}

impl<'a> MenuEntry<'a> {
    pub const fn new(label: &'a str, value: i32) -> Self {
        Self { label, value }
    }

    /// Title row; its value is never returned.
    pub const fn title(label: &'a str) -> Self {
        Self { label, value: 0 }
    }

    /// Terminator for tables built in sentinel style.
    pub const fn end() -> Self {
        Self {
            label: "",
            value: 0,
        }
    }
}

/// A validated menu table.
///
/// Element 0 is the title. Navigable entries are addressed `1..=count()`.
#[derive(Clone, Copy, Debug)]
pub struct Menu<'a> {
    entries: &'a [MenuEntry<'a>],
}

impl<'a> Menu<'a> {
    /// Validate an explicit-length table.
    pub fn new(entries: &'a [MenuEntry<'a>]) -> Result<Self, Error> {
        if let Some(index) = entries.iter().position(|entry| entry.label.is_empty()) {
            return Err(Error::EmptyLabel(index));
        }
        if entries.len() < 2 {
            return Err(Error::NoNavigableEntries);
        }
        Ok(Self { entries })
    }

    /// Validate a table that ends at its first empty label.
    ///
    /// Anything after the terminator is ignored. A table with no
    /// terminator is taken whole.
    pub fn from_terminated(entries: &'a [MenuEntry<'a>]) -> Result<Self, Error> {
        let len = entries
            .iter()
            .position(|entry| entry.label.is_empty())
            .unwrap_or(entries.len());
        if len == 0 {
            return Err(Error::EmptyLabel(0));
        }
        Self::new(&entries[..len])
    }

    /// Number of navigable entries (title excluded).
    pub fn count(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn title_label(&self) -> &'a str {
        self.entries[0].label
    }

    /// Entry at a navigable index, `None` outside `1..=count()`.
    pub fn get(&self, index: usize) -> Option<&'a MenuEntry<'a>> {
        if index == 0 {
            return None;
        }
        self.entries.get(index)
    }

    /// # Panics
    ///
    /// If `index` is outside `1..=count()`.
    pub fn label_at(&self, index: usize) -> &'a str {
        self.entry(index).label
    }

    /// # Panics
    ///
    /// If `index` is outside `1..=count()`.
    pub fn value_at(&self, index: usize) -> i32 {
        self.entry(index).value
    }

    /// Navigable entries paired with their index.
    pub fn items(&self) -> impl Iterator<Item = (usize, &'a MenuEntry<'a>)> + 'a {
        let entries = self.entries;
        entries.iter().enumerate().skip(1)
    }

    /// Widest navigable label in cells.
    pub fn widest_label(&self) -> usize {
        self.items()
            .map(|(_, entry)| entry.label.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn entry(&self, index: usize) -> &'a MenuEntry<'a> {
        match self.get(index) {
            Some(entry) => entry,
            None => panic!("menu index {} outside 1..={}", index, self.count()),
        }
    }
}
