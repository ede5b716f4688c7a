//! Unified error type for encoder-menu.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for on-target logging.

use core::fmt;

/// Configuration errors. All of them are raised before a menu session
/// starts drawing; a running session cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The entry list holds a title but nothing to select.
    NoNavigableEntries,

    /// The entry at this position has an empty label.
    EmptyLabel(usize),

    /// The display cannot hold a header plus one item row, or is
    /// narrower than the marker plus one character.
    UnsupportedGeometry { columns: usize, rows: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoNavigableEntries => f.write_str("menu has no selectable entries"),
            Error::EmptyLabel(index) => write!(f, "menu entry {} has an empty label", index),
            Error::UnsupportedGeometry { columns, rows } => {
                write!(f, "unsupported display geometry {}x{} cells", columns, rows)
            }
        }
    }
}
