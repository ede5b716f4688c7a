//! Hardware-facing seams: the character display and the clickable encoder.
//!
//! The menu core only talks to these two traits. Concrete adapters:
//!
//! - **Display**: [`display::CellDisplay`] over any `embedded-graphics`
//!   draw target with a monospace font (SSD1306 OLED in the firmware)
//! - **Encoder**: [`input_logic::EncoderSampler`] decodes quadrature and
//!   click/double-click/hold from raw pin levels; the `embedded` feature
//!   adds a GPIO sampling task around it

pub mod display;
#[cfg(feature = "embedded")]
pub mod encoder;
pub mod input_logic;

/// A fixed grid of character cells.
///
/// All coordinates and sizes are in cells, never pixels. Row 0 is the top
/// of the display.
pub trait DisplaySurface {
    type Color: Copy;

    /// Number of character cells per row.
    fn columns(&self) -> usize;

    /// Number of rows that fit on the display.
    fn rows(&self) -> usize;

    /// Fill the whole display with `background`.
    fn clear(&mut self, background: Self::Color);

    /// Move the text cursor. The next [`write_text`](Self::write_text)
    /// starts at this cell.
    fn set_cursor(&mut self, column: usize, row: usize);

    /// Write a run of text at the cursor and advance it by one cell per
    /// character.
    fn write_text(&mut self, text: &str, foreground: Self::Color, background: Self::Color);

    /// Fill a rectangle of cells with a solid colour.
    fn fill_rect(
        &mut self,
        column: usize,
        row: usize,
        width: usize,
        height: usize,
        color: Self::Color,
    );

    /// Push pending drawing to the panel. Called once after every paint
    /// that issued draw calls. Unbuffered surfaces keep the default.
    fn present(&mut self) {}
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    type Color = T::Color;

    fn columns(&self) -> usize {
        (**self).columns()
    }

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn clear(&mut self, background: Self::Color) {
        (**self).clear(background)
    }

    fn set_cursor(&mut self, column: usize, row: usize) {
        (**self).set_cursor(column, row)
    }

    fn write_text(&mut self, text: &str, foreground: Self::Color, background: Self::Color) {
        (**self).write_text(text, foreground, background)
    }

    fn fill_rect(
        &mut self,
        column: usize,
        row: usize,
        width: usize,
        height: usize,
        color: Self::Color,
    ) {
        (**self).fill_rect(column, row, width, height, color)
    }

    fn present(&mut self) {
        (**self).present()
    }
}

/// Encoder rotation since the last poll. At most one step per poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    None,
    /// Counter-clockwise: move the selection toward the first item.
    Left,
    /// Clockwise: move the selection toward the last item.
    Right,
}

/// Encoder push-button state as reported by the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Idle,
    Clicked,
    DoubleClicked,
    /// Pressed past the hold threshold. Reported on every poll until the
    /// button is let go.
    Held,
    /// Let go after a hold.
    Released,
}

impl ButtonState {
    /// The session outcome this state would end a menu with, if any.
    pub fn outcome(self) -> Option<ButtonOutcome> {
        match self {
            ButtonState::Clicked => Some(ButtonOutcome::Clicked),
            ButtonState::DoubleClicked => Some(ButtonOutcome::DoubleClicked),
            ButtonState::Held => Some(ButtonOutcome::Held),
            ButtonState::Idle | ButtonState::Released => None,
        }
    }
}

/// How the button ended a menu session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonOutcome {
    Clicked,
    DoubleClicked,
    Held,
}

/// Non-blocking encoder polling.
pub trait InputSource {
    /// Rotation since the previous call, one step at most.
    fn poll_motion(&mut self) -> Motion;

    /// Current button state.
    fn poll_button(&mut self) -> ButtonState;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll_motion(&mut self) -> Motion {
        (**self).poll_motion()
    }

    fn poll_button(&mut self) -> ButtonState {
        (**self).poll_button()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_press_states_end_a_session() {
        assert_eq!(ButtonState::Clicked.outcome(), Some(ButtonOutcome::Clicked));
        assert_eq!(
            ButtonState::DoubleClicked.outcome(),
            Some(ButtonOutcome::DoubleClicked)
        );
        assert_eq!(ButtonState::Held.outcome(), Some(ButtonOutcome::Held));
        assert_eq!(ButtonState::Idle.outcome(), None);
        assert_eq!(ButtonState::Released.outcome(), None);
    }
}
