//! Application-wide constants and compile-time configuration.
//!
//! Layout limits, encoder timing and pin assignments live here so they
//! can be tuned in one place. Colours are runtime configuration, see
//! [`crate::menu::Palette`].

// Layout

/// Glyph drawn in front of the selected item.
pub const SELECTION_MARKER: &str = ">";

/// Display rows reserved for the title header.
pub const HEADER_ROWS: usize = 1;

/// Smallest usable surface: header plus one item row.
pub const MIN_ROWS: usize = HEADER_ROWS + 1;

/// Smallest usable width: marker cell plus one label cell.
pub const MIN_COLUMNS: usize = 2;

// Encoder

/// Quadrature transitions per mechanical detent (most EC11 parts: 4).
pub const ENCODER_STEPS_PER_DETENT: u8 = 4;

/// Pin sampling period for the encoder task (ms).
pub const ENCODER_SAMPLE_INTERVAL_MS: u64 = 1;

/// Shortest press that counts as a click (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 10;

/// Window after a click in which a second click makes a double-click (ms).
pub const BUTTON_DOUBLE_CLICK_MS: u64 = 600;

/// Press duration after which the button reports `Held` (ms).
pub const BUTTON_HOLD_MS: u64 = 1200;

// GPIO pin assignments (nRF52840-DK defaults)
//
// The concrete `embassy_nrf::peripherals::*` pins are picked in `main.rs`.
// Adjust for your board.
//
//   Encoder A      → P0.11
//   Encoder B      → P0.12
//   Encoder switch → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
