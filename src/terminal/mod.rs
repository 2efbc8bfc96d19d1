// src/terminal/mod.rs
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::io::RawFd;

use crate::error::{Error, Result};

/// Raw mode on a terminal descriptor, restored when the guard is released.
///
/// | field     | change                                         |
/// |-----------|------------------------------------------------|
/// | `c_lflag` | `ECHO`, `ICANON`, `ISIG`, `IEXTEN` off         |
/// | `c_iflag` | `IXON`, `ICRNL`, `BRKINT`, `INPCK`, `ISTRIP` off |
/// | `c_oflag` | `OPOST` off                                    |
/// | `c_cflag` | `CS8` on                                       |
///
/// No signal handler is installed. With `ISIG` off the keyboard cannot raise
/// `SIGINT`/`SIGTSTP`, but a signal sent from outside leaves the terminal raw.
pub struct RawMode {
    fd: RawFd,
    saved: libc::termios,
    restored: bool,
}

impl RawMode {
    /// Enters raw mode on standard input.
    pub fn enter() -> Result<Self> {
        Self::enter_on(libc::STDIN_FILENO)
    }

    pub fn enter_on(fd: RawFd) -> Result<Self> {
        // SAFETY: isatty only inspects the descriptor.
        if unsafe { libc::isatty(fd) } != 1 {
            return Err(Error::NotATerminal(fd));
        }

        let saved = get_attributes(fd)?;
        let raw = make_raw(saved);
        if let Err(source) = set_attributes(fd, &raw) {
            // Never leave the descriptor half raw.
            let _ = set_attributes(fd, &saved);
            return Err(Error::TerminalAttributes {
                action: "set",
                source,
            });
        }

        log::debug!("raw mode entered on fd {fd}");
        Ok(RawMode {
            fd,
            saved,
            restored: false,
        })
    }

    /// Restores the saved attributes now.
    pub fn exit(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        set_attributes(self.fd, &self.saved).map_err(|source| Error::TerminalAttributes {
            action: "restore",
            source,
        })?;
        log::debug!("terminal attributes restored on fd {}", self.fd);
        Ok(())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("{e}");
        }
    }
}

fn make_raw(mut attrs: libc::termios) -> libc::termios {
    attrs.c_lflag &= !(libc::ECHO | libc::ICANON | libc::ISIG | libc::IEXTEN);
    attrs.c_iflag &= !(libc::IXON | libc::ICRNL | libc::BRKINT | libc::INPCK | libc::ISTRIP);
    attrs.c_oflag &= !libc::OPOST;
    attrs.c_cflag |= libc::CS8;
    attrs
}

fn get_attributes(fd: RawFd) -> Result<libc::termios> {
    let mut attrs = MaybeUninit::<libc::termios>::uninit();
    // SAFETY: tcgetattr fully initializes `attrs` when it returns 0.
    if unsafe { libc::tcgetattr(fd, attrs.as_mut_ptr()) } != 0 {
        return Err(Error::TerminalAttributes {
            action: "read",
            source: io::Error::last_os_error(),
        });
    }
    Ok(unsafe { attrs.assume_init() })
}

fn set_attributes(fd: RawFd, attrs: &libc::termios) -> io::Result<()> {
    // SAFETY: `attrs` points to a valid termios for the duration of the call.
    if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, attrs) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
