// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong inside the editor library.
#[derive(Error, Debug)]
pub enum Error {
    /// The descriptor handed to the terminal controller is not a TTY.
    #[error("file descriptor {0} is not a terminal")]
    NotATerminal(i32),

    /// `tcgetattr`/`tcsetattr` failed.
    #[error("could not {action} terminal attributes: {source}")]
    TerminalAttributes {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
