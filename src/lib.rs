//! Scrollable single-selection menu for small character displays, driven
//! by a clickable rotary encoder.
//!
//! The library is `no_std` and host-testable: the menu talks to hardware
//! only through [`ui::DisplaySurface`] and [`ui::InputSource`]. The
//! firmware in `main.rs` (feature `embedded`) plugs in an SSD1306 OLED and
//! a GPIO encoder.
//!
//! ```ignore
//! const MAIN: [MenuEntry<'static>; 4] = [
//!     MenuEntry::title("Settings"),
//!     MenuEntry::new("Brightness", 1),
//!     MenuEntry::new("Contrast", 2),
//!     MenuEntry::new("Reset", 3),
//! ];
//!
//! let mut menu = EncoderMenu::new(surface, encoder);
//! let picked = menu.show(&Menu::new(&MAIN)?, 1)?;
//! ```
//!
//! Usage: `cargo test --lib` on the host, `cargo run --release --features
//! embedded` with probe-rs for the board.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to later modules.
mod fmt;

pub mod config;
pub mod error;
pub mod menu;
pub mod ui;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use menu::{EncoderMenu, Menu, MenuEntry, MenuState, Palette, Renderer, Selection, Viewport};
pub use ui::{ButtonOutcome, ButtonState, DisplaySurface, InputSource, Motion};
