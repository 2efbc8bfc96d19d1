// src/editor/cursor.rs
use super::buffer::LineBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Position where edits land, as (row, column) into the line buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Cursor { row, col }
    }

    /// Moves one step in `direction`, then clamps the column to the current line.
    ///
    /// The clamp runs after every direction, horizontal ones included. It only ever
    /// shortens the column.
    pub fn step(&mut self, direction: Direction, buffer: &LineBuffer) {
        match direction {
            Direction::Up => {
                if self.row > 0 {
                    self.row -= 1;
                }
            }
            Direction::Down => {
                if self.row + 1 < buffer.len() {
                    self.row += 1;
                }
            }
            Direction::Left => {
                if self.col > 0 {
                    self.col -= 1;
                }
            }
            Direction::Right => {
                if buffer.line_len(self.row).is_some_and(|len| self.col < len) {
                    self.col += 1;
                }
            }
        }
        self.clamp(buffer);
    }

    pub fn clamp(&mut self, buffer: &LineBuffer) {
        if let Some(len) = buffer.line_len(self.row) {
            self.col = self.col.min(len);
        }
    }
}
