// src/editor/command.rs
use std::io::{self, ErrorKind, Read};

use super::cursor::Direction;

pub const ESCAPE: u8 = 0x1b;
pub const CTRL_Q: u8 = 17;
pub const CTRL_W: u8 = 23;
pub const CTRL_S: u8 = 19;
pub const CTRL_A: u8 = 1;
pub const CTRL_D: u8 = 4;
pub const DELETE: u8 = 127;

/// A decoded editing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Direction),
    /// Delete the byte left of the cursor.
    Backspace,
    /// Delete the byte under the cursor (`ESC [ 3 ~`).
    ForwardDelete,
    Insert(u8),
}

impl Command {
    /// Maps a single non-escape byte to its command. Every unbound byte inserts itself.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            CTRL_Q => Command::Quit,
            CTRL_W => Command::Move(Direction::Up),
            CTRL_S => Command::Move(Direction::Down),
            CTRL_A => Command::Move(Direction::Left),
            CTRL_D => Command::Move(Direction::Right),
            DELETE => Command::Backspace,
            other => Command::Insert(other),
        }
    }
}

/// Outcome of reading one input unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keypress {
    Command(Command),
    /// An escape sequence that is unknown or was cut off by end of input.
    Ignored,
    /// Input ended before the first byte of a command.
    Eof,
}

impl Keypress {
    /// Blocks for one byte and, after an escape byte, for the rest of the sequence.
    pub fn read<R: Read>(input: &mut R) -> io::Result<Self> {
        let Some(byte) = read_byte(input)? else {
            return Ok(Keypress::Eof);
        };
        if byte != ESCAPE {
            return Ok(Keypress::Command(Command::from_byte(byte)));
        }

        // Both bytes are read before either is inspected.
        let Some(first) = read_byte(input)? else {
            return Ok(Keypress::Ignored);
        };
        let Some(second) = read_byte(input)? else {
            return Ok(Keypress::Ignored);
        };

        if first == b'[' && second == b'3' && read_byte(input)? == Some(b'~') {
            return Ok(Keypress::Command(Command::ForwardDelete));
        }
        Ok(Keypress::Ignored)
    }
}

/// Reads exactly one byte, `None` at end of input.
fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
