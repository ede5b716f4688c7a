//! Scroll window over the navigable entries.
//!
//! Pure state: no drawing, no input. Selection moves by single steps,
//! never wraps, and the window scrolls one row at a time just far enough
//! to keep the selection visible.

use crate::ui::Motion;

/// Selected index and first visible index, both 1-based.
///
/// Invariant: `1 <= window_start <= selected <= window_start + visible_rows - 1`
/// and `selected <= count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    selected: usize,
    window_start: usize,
    count: usize,
    visible_rows: usize,
}

impl Viewport {
    /// Place the window for an initial selection.
    ///
    /// `active` is clamped into `1..=count`. If it lies below the first
    /// screenful, the window is scrolled so it sits on the bottom row.
    /// `count` and `visible_rows` below 1 are treated as 1.
    pub fn new(active: usize, count: usize, visible_rows: usize) -> Self {
        let count = count.max(1);
        let visible_rows = visible_rows.max(1);
        let selected = active.clamp(1, count);
        let window_start = if selected > visible_rows {
            selected - visible_rows + 1
        } else {
            1
        };
        Self {
            selected,
            window_start,
            count,
            visible_rows,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Last index on screen.
    pub fn window_end(&self) -> usize {
        (self.window_start + self.visible_rows - 1).min(self.count)
    }

    /// Move toward index 1. Returns `false` at the top.
    pub fn step_down(&mut self) -> bool {
        if self.selected <= 1 {
            return false;
        }
        self.selected -= 1;
        if self.selected < self.window_start {
            self.window_start -= 1;
        }
        true
    }

    /// Move toward the last index. Returns `false` at the bottom.
    pub fn step_up(&mut self) -> bool {
        if self.selected >= self.count {
            return false;
        }
        self.selected += 1;
        if self.selected > self.window_start + self.visible_rows - 1 {
            self.window_start = self.selected - self.visible_rows + 1;
        }
        true
    }

    /// Apply one encoder step: `Left` steps down, `Right` steps up.
    pub fn apply(&mut self, motion: Motion) -> bool {
        match motion {
            Motion::Left => self.step_down(),
            Motion::Right => self.step_up(),
            Motion::None => false,
        }
    }

    /// `(row, index)` for every screen row that shows an entry. Row 0 is
    /// the first item row, directly under the title.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, usize)> {
        let start = self.window_start;
        (start..=self.window_end()).map(move |index| (index - start, index))
    }
}
