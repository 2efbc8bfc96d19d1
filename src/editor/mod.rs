// src/editor/mod.rs
pub mod buffer;
pub mod command;
pub mod cursor;

pub use buffer::LineBuffer;
pub use command::{Command, Keypress};
pub use cursor::{Cursor, Direction};

use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::render;
use crate::terminal::RawMode;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the line buffer and the cursor for the whole session.
#[derive(Debug, Clone)]
pub struct Editor {
    buffer: LineBuffer,
    cursor: Cursor,
}

impl Editor {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::from_buffer(LineBuffer::open(path))
    }

    pub fn from_buffer(buffer: LineBuffer) -> Self {
        Editor {
            buffer,
            cursor: Cursor::default(),
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Places the cursor without validating it against the buffer.
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.step(direction, &self.buffer);
    }

    /// Inserts `byte` at the cursor and advances one column. A `\n` is stored as data;
    /// it does not split the line.
    pub fn insert_char(&mut self, byte: u8) {
        if self.cursor.row >= self.buffer.len() {
            self.buffer.push_empty_line();
        }
        if self.buffer.insert(self.cursor.row, self.cursor.col, byte) {
            self.cursor.col += 1;
        }
    }

    /// Backspace. Does nothing at column 0; lines are never joined.
    pub fn delete_char(&mut self) {
        if self.cursor.col == 0 {
            return;
        }
        if self.buffer.remove(self.cursor.row, self.cursor.col - 1).is_some() {
            self.cursor.col -= 1;
        }
    }

    /// Removes the byte under the cursor, which may be the line's `\n`.
    pub fn forward_delete_char(&mut self) {
        self.buffer.remove(self.cursor.row, self.cursor.col);
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::Move(direction) => self.move_cursor(direction),
            Command::Backspace => self.delete_char(),
            Command::ForwardDelete => self.forward_delete_char(),
            Command::Insert(byte) => self.insert_char(byte),
        }
        Flow::Continue
    }

    /// Reads one input unit and applies it.
    pub fn process_keypress<R: Read>(&mut self, input: &mut R) -> io::Result<Flow> {
        match Keypress::read(input)? {
            Keypress::Command(command) => Ok(self.apply(command)),
            Keypress::Ignored => Ok(Flow::Continue),
            Keypress::Eof => {
                log::info!("input closed");
                Ok(Flow::Quit)
            }
        }
    }

    pub fn refresh_screen<W: Write>(&self, out: &mut W) -> io::Result<()> {
        render::render(out, &self.buffer, self.cursor)
    }

    /// Alternates one full repaint with one command until quit or end of input.
    pub fn run<R: Read, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            self.refresh_screen(output)?;
            if self.process_keypress(input)? == Flow::Quit {
                log::info!("quit");
                return Ok(());
            }
        }
    }

    /// Runs on the controlling terminal, holding raw mode for the duration.
    pub fn run_terminal(&mut self) -> Result<()> {
        let raw_mode = RawMode::enter()?;
        let result = self.run(&mut io::stdin().lock(), &mut io::stdout().lock());
        let restored = raw_mode.exit();
        result?;
        restored
    }
}
