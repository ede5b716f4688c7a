//! Encoder-driven menu sessions.
//!
//! [`EncoderMenu`] owns the display, the encoder and the colour palette.
//! Configure it once, then call [`show`](EncoderMenu::show) as often as
//! needed; every call is an independent session that paints the menu,
//! follows the encoder, and returns when the button is clicked,
//! double-clicked or held.
//!
//! Each loop iteration:
//!
//! 1. poll rotation and move the selection one step at most
//! 2. poll the button; `Held` blocks until `Released`
//! 3. repaint the item rows if the selection or window moved

use crate::config::{HEADER_ROWS, MIN_COLUMNS, MIN_ROWS};
use crate::error::Error;
use crate::menu::render::{MenuState, Palette, Renderer};
use crate::menu::{Menu, MenuEntry, Viewport};
use crate::ui::{ButtonOutcome, ButtonState, DisplaySurface, InputSource, Motion};

/// Result of one menu session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    /// Navigable index of the chosen entry (1-based).
    pub index: usize,
    /// The chosen entry's value.
    pub value: i32,
    /// How the button ended the session.
    pub outcome: ButtonOutcome,
}

/// What one poll of the input produced.
enum Poll {
    Running,
    Done(ButtonOutcome),
    /// `Held` seen; the session ends once the button is released.
    AwaitRelease,
}

/// A reusable menu bound to one display and one encoder.
pub struct EncoderMenu<S: DisplaySurface, I> {
    surface: S,
    input: I,
    palette: Palette<S::Color>,
    last_button: Option<ButtonOutcome>,
}

impl<S, I> EncoderMenu<S, I>
where
    S: DisplaySurface,
    I: InputSource,
{
    /// Menu with the default palette for the display's colour type.
    pub fn new(surface: S, input: I) -> Self
    where
        Palette<S::Color>: Default,
    {
        Self::with_palette(surface, input, Palette::default())
    }

    pub fn with_palette(surface: S, input: I, palette: Palette<S::Color>) -> Self {
        Self {
            surface,
            input,
            palette,
            last_button: None,
        }
    }

    /// Replace the colours used by later sessions.
    pub fn set_colors(&mut self, palette: Palette<S::Color>) {
        self.palette = palette;
    }

    pub fn palette(&self) -> &Palette<S::Color> {
        &self.palette
    }

    /// How the most recent session ended, `None` before the first one.
    pub fn last_button(&self) -> Option<ButtonOutcome> {
        self.last_button
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Give back the display and encoder.
    pub fn release(self) -> (S, I) {
        (self.surface, self.input)
    }

    /// Run a session, starting with `active` selected (clamped into
    /// `1..=menu.count()`).
    ///
    /// Blocks until the button ends the session. A hold is only reported
    /// after the button is let go; rotation is ignored meanwhile.
    ///
    /// The input is busy-polled. If it is fed by another task on the same
    /// executor, such as `SharedEncoder` on a single-threaded embassy
    /// executor, that task never runs and this never returns: use
    /// `show_async` there.
    pub fn show(&mut self, menu: &Menu<'_>, active: usize) -> Result<Selection, Error> {
        let mut state = self.begin(menu, active)?;

        let outcome = loop {
            let outcome = match self.poll(&mut state) {
                Poll::Running => None,
                Poll::Done(outcome) => Some(outcome),
                Poll::AwaitRelease => {
                    while self.input.poll_button() != ButtonState::Released {
                        core::hint::spin_loop();
                    }
                    Some(ButtonOutcome::Held)
                }
            };

            Renderer::new(&self.palette).window_paint(&mut self.surface, menu, &mut state);

            if let Some(outcome) = outcome {
                break outcome;
            }
        };

        Ok(self.finish(menu, &state, outcome))
    }

    /// [`show`](Self::show) with the first entry selected.
    pub fn show_first(&mut self, menu: &Menu<'_>) -> Result<Selection, Error> {
        self.show(menu, 1)
    }

    /// Validate a raw table and [`show`](Self::show) it.
    pub fn show_entries(
        &mut self,
        entries: &[MenuEntry<'_>],
        active: usize,
    ) -> Result<Selection, Error> {
        let menu = Menu::new(entries)?;
        self.show(&menu, active)
    }

    /// Cooperative [`show`](Self::show): yields to the executor once per
    /// iteration and on every poll while waiting for a held button to be
    /// released.
    #[cfg(feature = "async")]
    pub async fn show_async(&mut self, menu: &Menu<'_>, active: usize) -> Result<Selection, Error> {
        use embassy_futures::yield_now;

        let mut state = self.begin(menu, active)?;

        let outcome = loop {
            let outcome = match self.poll(&mut state) {
                Poll::Running => None,
                Poll::Done(outcome) => Some(outcome),
                Poll::AwaitRelease => {
                    while self.input.poll_button() != ButtonState::Released {
                        yield_now().await;
                    }
                    Some(ButtonOutcome::Held)
                }
            };

            Renderer::new(&self.palette).window_paint(&mut self.surface, menu, &mut state);

            if let Some(outcome) = outcome {
                break outcome;
            }
            yield_now().await;
        };

        Ok(self.finish(menu, &state, outcome))
    }

    /// Check the display, seed the session state and paint everything.
    fn begin(&mut self, menu: &Menu<'_>, active: usize) -> Result<MenuState, Error> {
        let columns = self.surface.columns();
        let rows = self.surface.rows();
        if rows < MIN_ROWS || columns < MIN_COLUMNS {
            warn!("menu: unsupported geometry {}x{}", columns, rows);
            return Err(Error::UnsupportedGeometry { columns, rows });
        }

        // Marker or leading space takes one cell of every item row.
        if menu.widest_label() >= columns {
            warn!(
                "menu: labels wider than {} cells will be truncated",
                columns - 1
            );
        }

        let viewport = Viewport::new(active, menu.count(), rows - HEADER_ROWS);
        let mut state = MenuState::new(viewport);
        Renderer::new(&self.palette).full_paint(&mut self.surface, menu, &mut state);
        debug!(
            "menu: session start, {} items, active={}",
            menu.count(),
            viewport.selected()
        );
        Ok(state)
    }

    fn poll(&mut self, state: &mut MenuState) -> Poll {
        let motion = self.input.poll_motion();
        if motion != Motion::None && state.viewport.apply(motion) {
            trace!("menu: selected={}", state.viewport.selected());
        }

        match self.input.poll_button().outcome() {
            Some(ButtonOutcome::Held) => Poll::AwaitRelease,
            Some(outcome) => Poll::Done(outcome),
            None => Poll::Running,
        }
    }

    fn finish(&mut self, menu: &Menu<'_>, state: &MenuState, outcome: ButtonOutcome) -> Selection {
        let index = state.viewport.selected();
        self.last_button = Some(outcome);
        let selection = Selection {
            index,
            value: menu.value_at(index),
            outcome,
        };
        info!(
            "menu: {} -> index={} value={}",
            outcome,
            selection.index,
            selection.value
        );
        selection
    }
}
