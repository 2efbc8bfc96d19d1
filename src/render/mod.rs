// src/render/mod.rs
use std::fmt;
use std::io::{self, Write};

use crossterm::{
    queue,
    terminal::{Clear, ClearType},
    Command,
};

use crate::editor::{Cursor, LineBuffer};

/// `ESC [ H`: cursor to the top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Home;

impl Command for Home {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[H")
    }
}

/// `ESC [ row ; col H` with 0-based input, unlike `cursor::MoveTo` not limited to `u16`.
#[derive(Debug, Clone, Copy)]
pub struct MoveCursor {
    pub row: usize,
    pub col: usize,
}

impl Command for MoveCursor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[{};{}H", self.row + 1, self.col + 1)
    }
}

/// Repaints the whole screen: clear, home, every line verbatim, then the cursor.
pub fn render<W: Write>(out: &mut W, buffer: &LineBuffer, cursor: Cursor) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), Home)?;
    for line in buffer.lines() {
        out.write_all(line)?;
    }
    queue!(
        out,
        MoveCursor {
            row: cursor.row,
            col: cursor.col,
        }
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame() {
        let buffer = LineBuffer::from_lines(["ab\n", "cd"]);
        let mut screen = Vec::new();
        render(&mut screen, &buffer, Cursor::new(1, 2)).unwrap();
        assert_eq!(screen, b"\x1b[2J\x1b[Hab\ncd\x1b[2;3H");
    }

    #[test]
    fn test_render_empty_buffer() {
        let mut screen = Vec::new();
        render(&mut screen, &LineBuffer::new(), Cursor::default()).unwrap();
        assert_eq!(screen, b"\x1b[2J\x1b[H\x1b[1;1H");
    }

    #[test]
    fn test_large_coordinates_are_not_truncated() {
        let mut ansi = String::new();
        MoveCursor { row: 70_000, col: 99_999 }.write_ansi(&mut ansi).unwrap();
        assert_eq!(ansi, "\x1b[70001;100000H");
    }

    #[test]
    fn test_raw_bytes_pass_through() {
        let buffer = LineBuffer::from_lines([vec![0xff, b'\r', b'\n']]);
        let mut screen = Vec::new();
        render(&mut screen, &buffer, Cursor::default()).unwrap();
        assert!(screen.windows(3).any(|w| w == [0xff, b'\r', b'\n']));
    }
}
