// src/editor/buffer.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The open document as raw byte lines.
///
/// Each line keeps the `\n` it was read with, so lengths and columns count the
/// terminator. The last line has no terminator when the source did not end with one.
/// A buffer handed to the editor always holds at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    content: Vec<Vec<u8>>,
}

// Never empty, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl LineBuffer {
    /// A buffer with a single empty line.
    pub fn new() -> Self {
        LineBuffer {
            content: vec![Vec::new()],
        }
    }

    /// Builds a buffer from already split lines. An empty list is seeded with one empty line.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut buffer = LineBuffer {
            content: lines.into_iter().map(Into::into).collect(),
        };
        buffer.seed_if_empty();
        buffer
    }

    /// Reads `path` line by line. A file that cannot be opened yields a single empty line.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let buffer = Self::from_reader(BufReader::new(file));
                log::info!("opened {}: {} lines", path.display(), buffer.len());
                buffer
            }
            Err(e) => {
                log::debug!("could not open {}: {e}", path.display());
                Self::new()
            }
        }
    }

    /// Splits `reader` on `\n`, keeping every terminator.
    ///
    /// A read error stops reading; the lines collected so far are kept.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Self {
        let mut content = Vec::new();
        loop {
            let mut line = Vec::new();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => break,
                Ok(_) => content.push(line),
                Err(e) => {
                    log::debug!("stopped reading after {} lines: {e}", content.len());
                    break;
                }
            }
        }

        let mut buffer = LineBuffer { content };
        buffer.seed_if_empty();
        buffer
    }

    fn seed_if_empty(&mut self) {
        if self.content.is_empty() {
            self.content.push(Vec::new());
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn line(&self, row: usize) -> Option<&[u8]> {
        self.content.get(row).map(Vec::as_slice)
    }

    /// Length of `row` in bytes, terminator included.
    pub fn line_len(&self, row: usize) -> Option<usize> {
        self.content.get(row).map(Vec::len)
    }

    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.content.iter().map(Vec::as_slice)
    }

    pub fn push_empty_line(&mut self) {
        self.content.push(Vec::new());
    }

    /// Inserts `byte` before position `col` of `row`. Returns false when the position
    /// does not exist.
    pub fn insert(&mut self, row: usize, col: usize, byte: u8) -> bool {
        match self.content.get_mut(row) {
            Some(line) if col <= line.len() => {
                line.insert(col, byte);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the byte at `col` of `row`.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<u8> {
        let line = self.content.get_mut(row)?;
        if col < line.len() {
            Some(line.remove(col))
        } else {
            None
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lines_keep_terminators() {
        let buffer = LineBuffer::from_reader(&b"one\ntwo\nthree"[..]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.line(0), Some(&b"one\n"[..]));
        assert_eq!(buffer.line(1), Some(&b"two\n"[..]));
        assert_eq!(buffer.line(2), Some(&b"three"[..]));
    }

    #[test]
    fn test_trailing_newline_adds_no_extra_line() {
        let buffer = LineBuffer::from_reader(&b"a\nb\n"[..]);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.line_len(1), Some(2));
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let buffer = LineBuffer::from_reader(&b"\n\n\n"[..]);
        assert_eq!(buffer.len(), 3);
        assert!(buffer.lines().all(|l| l == b"\n"));
    }

    #[test]
    fn test_empty_input_seeds_one_line() {
        let buffer = LineBuffer::from_reader(&b""[..]);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.line(0), Some(&b""[..]));
    }

    #[test]
    fn test_open_missing_file_seeds_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");
        let buffer = LineBuffer::open(&path);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.line_len(0), Some(0));
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fn main() {}\n\n// end").unwrap();
        let buffer = LineBuffer::open(file.path());
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.line(2), Some(&b"// end"[..]));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut buffer = LineBuffer::from_lines(["ab\n"]);
        assert!(buffer.insert(0, 1, b'X'));
        assert_eq!(buffer.line(0), Some(&b"aXb\n"[..]));
        assert_eq!(buffer.remove(0, 1), Some(b'X'));
        assert_eq!(buffer.remove(0, 3), None);
        assert!(!buffer.insert(0, 4, b'Y'));
        assert!(!buffer.insert(1, 0, b'Y'));
    }
}
