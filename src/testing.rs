//! Host test doubles: a character-grid display that records draw calls and
//! a scripted encoder.

use std::collections::VecDeque;

use embedded_graphics::pixelcolor::Rgb565;

use crate::ui::{ButtonState, DisplaySurface, InputSource, Motion};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Fill,
    Cursor(usize, usize),
    Text(String),
}

#[derive(Clone, Copy, Debug)]
struct Cell {
    ch: char,
    fg: Option<Rgb565>,
    bg: Option<Rgb565>,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: None,
    bg: None,
};

pub struct RecordingSurface {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    cursor: (usize, usize),
    pub ops: Vec<Op>,
    pub presents: usize,
    /// Characters written past the right or bottom edge.
    pub overflow: usize,
}

impl RecordingSurface {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![BLANK; columns * rows],
            cursor: (0, 0),
            ops: Vec::new(),
            presents: 0,
            overflow: 0,
        }
    }

    pub fn line(&self, row: usize) -> String {
        self.cells[row * self.columns..(row + 1) * self.columns]
            .iter()
            .map(|cell| cell.ch)
            .collect()
    }

    pub fn foreground(&self, column: usize, row: usize) -> Option<Rgb565> {
        self.cells[row * self.columns + column].fg
    }

    pub fn background(&self, column: usize, row: usize) -> Option<Rgb565> {
        self.cells[row * self.columns + column].bg
    }
}

impl DisplaySurface for RecordingSurface {
    type Color = Rgb565;

    fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn clear(&mut self, background: Rgb565) {
        self.ops.push(Op::Clear);
        for cell in &mut self.cells {
            *cell = Cell {
                bg: Some(background),
                ..BLANK
            };
        }
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, column: usize, row: usize) {
        self.ops.push(Op::Cursor(column, row));
        self.cursor = (column, row);
    }

    fn write_text(&mut self, text: &str, foreground: Rgb565, background: Rgb565) {
        self.ops.push(Op::Text(text.to_string()));
        let (mut column, row) = self.cursor;
        for ch in text.chars() {
            if column < self.columns && row < self.rows {
                self.cells[row * self.columns + column] = Cell {
                    ch,
                    fg: Some(foreground),
                    bg: Some(background),
                };
            } else {
                self.overflow += 1;
            }
            column += 1;
        }
        self.cursor = (column, row);
    }

    fn fill_rect(&mut self, column: usize, row: usize, width: usize, height: usize, color: Rgb565) {
        self.ops.push(Op::Fill);
        for r in row..(row + height).min(self.rows) {
            for c in column..(column + width).min(self.columns) {
                let cell = &mut self.cells[r * self.columns + c];
                cell.ch = ' ';
                cell.fg = None;
                cell.bg = Some(color);
            }
        }
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

/// Replays fixed motion and button sequences. Running out of motions
/// yields `Motion::None`; running out of button states panics, so a test
/// that forgets to end the session fails instead of spinning.
pub struct ScriptedInput {
    motions: VecDeque<Motion>,
    buttons: VecDeque<ButtonState>,
    pub motion_polls: usize,
    pub button_polls: usize,
}

impl ScriptedInput {
    pub fn new(motions: &[Motion], buttons: &[ButtonState]) -> Self {
        Self {
            motions: motions.iter().copied().collect(),
            buttons: buttons.iter().copied().collect(),
            motion_polls: 0,
            button_polls: 0,
        }
    }

    pub fn remaining_motions(&self) -> usize {
        self.motions.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_motion(&mut self) -> Motion {
        self.motion_polls += 1;
        self.motions.pop_front().unwrap_or(Motion::None)
    }

    fn poll_button(&mut self) -> ButtonState {
        self.button_polls += 1;
        match self.buttons.pop_front() {
            Some(state) => state,
            None => panic!("button script exhausted"),
        }
    }
}
