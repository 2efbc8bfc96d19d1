// src/lib.rs
//! A minimal raw-mode terminal text editor.
//!
//! The file is held as byte lines (terminators kept), repainted in full after every
//! keystroke, and edited with single control bytes:
//! Ctrl-W/S/A/D move, DEL backspaces, `ESC [ 3 ~` deletes forward, Ctrl-Q quits.
//! Edits are never written back to disk.

pub mod config;
pub mod editor;
pub mod error;
pub mod render;
pub mod terminal;
pub mod utils;

pub use editor::Editor;
pub use error::{Error, Result};
