//! Menu painting with change detection.
//!
//! The display link is slow, so after the initial full paint only the item
//! rows are rewritten, and only when the selection or the window moved.
//! Each item row is written edge to edge (label plus space padding), which
//! overwrites whatever the row showed before without a separate clear.
//!
//! Row layout, `columns` cells wide:
//!
//! ```text
//! row 0:  [    title, centred    ]   header colours
//! row n:  >Label                     marker in selected colours, rest normal
//! row m:   Label                     normal colours
//! ```

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565, RgbColor};

use crate::config::{HEADER_ROWS, SELECTION_MARKER};
use crate::menu::{Menu, Viewport};
use crate::ui::DisplaySurface;

/// Row padding, written in runs of up to this many cells.
const BLANKS: &str = "                ";

/// Colour roles used by the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette<C> {
    pub header_fg: C,
    pub header_bg: C,
    pub normal_fg: C,
    pub normal_bg: C,
    /// Selection marker only; the selected label keeps normal colours.
    pub selected_fg: C,
    pub selected_bg: C,
}

impl<C> Palette<C> {
    pub const fn new(
        header_fg: C,
        header_bg: C,
        normal_fg: C,
        normal_bg: C,
        selected_fg: C,
        selected_bg: C,
    ) -> Self {
        Self {
            header_fg,
            header_bg,
            normal_fg,
            normal_bg,
            selected_fg,
            selected_bg,
        }
    }
}

impl Default for Palette<Rgb565> {
    /// Blue on white header, white on blue items, white on red marker.
    fn default() -> Self {
        Self::new(
            Rgb565::BLUE,
            Rgb565::WHITE,
            Rgb565::WHITE,
            Rgb565::BLUE,
            Rgb565::WHITE,
            Rgb565::RED,
        )
    }
}

impl Default for Palette<BinaryColor> {
    /// Inverted header and marker on a dark background.
    fn default() -> Self {
        Self::new(
            BinaryColor::Off,
            BinaryColor::On,
            BinaryColor::On,
            BinaryColor::Off,
            BinaryColor::Off,
            BinaryColor::On,
        )
    }
}

/// Per-session navigation state plus what was last painted.
///
/// The painted fields are 0 until the first paint and are only written by
/// [`Renderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuState {
    pub viewport: Viewport,
    last_selected: usize,
    last_window_start: usize,
}

impl MenuState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            last_selected: 0,
            last_window_start: 0,
        }
    }

    pub fn last_selected(&self) -> usize {
        self.last_selected
    }

    pub fn last_window_start(&self) -> usize {
        self.last_window_start
    }

    /// Whether the screen no longer matches the viewport.
    pub fn is_dirty(&self) -> bool {
        self.viewport.selected() != self.last_selected
            || self.viewport.window_start() != self.last_window_start
    }

    fn mark_painted(&mut self) {
        self.last_selected = self.viewport.selected();
        self.last_window_start = self.viewport.window_start();
    }
}

/// Left padding that centres a title `width` cells wide, in whole cells.
/// Titles as wide as the display or wider are not padded.
pub fn header_padding(width: usize, columns: usize) -> usize {
    if width < columns {
        columns / 2 - width / 2
    } else {
        0
    }
}

/// Longest prefix of `text` that fits in `cells` character cells.
pub fn clip(text: &str, cells: usize) -> &str {
    match text.char_indices().nth(cells) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Paints a [`Menu`] onto a [`DisplaySurface`] with a [`Palette`].
pub struct Renderer<'p, C> {
    palette: &'p Palette<C>,
}

impl<'p, C: Copy> Renderer<'p, C> {
    pub fn new(palette: &'p Palette<C>) -> Self {
        Self { palette }
    }

    /// Clear the display, draw the title header and every visible item.
    pub fn full_paint<S>(&self, surface: &mut S, menu: &Menu<'_>, state: &mut MenuState)
    where
        S: DisplaySurface<Color = C>,
    {
        let columns = surface.columns();
        let palette = self.palette;

        surface.clear(palette.normal_bg);
        surface.fill_rect(0, 0, columns, HEADER_ROWS, palette.header_bg);

        let title = clip(menu.title_label(), columns);
        let pad = header_padding(title.chars().count(), columns);
        surface.set_cursor(pad, 0);
        surface.write_text(title, palette.header_fg, palette.header_bg);

        self.paint_rows(surface, menu, state);
        surface.present();
        debug!(
            "menu: full paint, selected={} window={}",
            state.viewport.selected(),
            state.viewport.window_start()
        );
    }

    /// Repaint the item rows if the selection or window moved since the
    /// last paint. Returns whether anything was drawn.
    pub fn window_paint<S>(&self, surface: &mut S, menu: &Menu<'_>, state: &mut MenuState) -> bool
    where
        S: DisplaySurface<Color = C>,
    {
        if !state.is_dirty() {
            return false;
        }
        self.paint_rows(surface, menu, state);
        surface.present();
        trace!(
            "menu: window paint, selected={} window={}",
            state.viewport.selected(),
            state.viewport.window_start()
        );
        true
    }

    fn paint_rows<S>(&self, surface: &mut S, menu: &Menu<'_>, state: &mut MenuState)
    where
        S: DisplaySurface<Color = C>,
    {
        let columns = surface.columns();
        let selected = state.viewport.selected();

        for (row, index) in state.viewport.visible_items() {
            surface.set_cursor(0, row + HEADER_ROWS);
            self.paint_item(surface, menu.label_at(index), index == selected, columns);
        }
        state.mark_painted();
    }

    fn paint_item<S>(&self, surface: &mut S, label: &str, selected: bool, columns: usize)
    where
        S: DisplaySurface<Color = C>,
    {
        let palette = self.palette;
        let lead = if selected {
            surface.write_text(SELECTION_MARKER, palette.selected_fg, palette.selected_bg);
            SELECTION_MARKER
        } else {
            surface.write_text(" ", palette.normal_fg, palette.normal_bg);
            " "
        };

        // Marker or leading space takes the first cell.
        let width = columns.saturating_sub(lead.chars().count());
        let label = clip(label, width);
        surface.write_text(label, palette.normal_fg, palette.normal_bg);

        let mut blank = width - label.chars().count();
        while blank > 0 {
            let run = blank.min(BLANKS.len());
            surface.write_text(&BLANKS[..run], palette.normal_fg, palette.normal_bg);
            blank -= run;
        }
    }
}
