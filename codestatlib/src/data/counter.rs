//! Line counting for single files.
//!
//! Counting works on raw bytes, so files that are not valid UTF-8 are
//! still counted. A line ends at `\n`, `\r\n`, or a lone `\r`; a trailing
//! fragment without a terminator counts as one more line.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

/// Count the lines in a byte buffer.
///
/// # Example
///
/// ```rust
/// use codestatlib::count_lines;
///
/// assert_eq!(count_lines(b""), 0);
/// assert_eq!(count_lines(b"one\ntwo\n"), 2);
/// assert_eq!(count_lines(b"one\ntwo"), 2);
/// assert_eq!(count_lines(b"one\r\ntwo\rthree"), 3);
/// ```
pub fn count_lines(bytes: &[u8]) -> u64 {
    LineCounter::default().feed(bytes).finish()
}

/// Count the lines in a file.
///
/// The file handle is scoped to this call and released on every path,
/// including a failed read.
///
/// # Example
///
/// ```rust
/// use codestatlib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("main.py");
/// fs::write(&file_path, "def main():\n    print('hi')\n").unwrap();
///
/// assert_eq!(count_file(&file_path).unwrap(), 2);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> std::io::Result<u64> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let mut counter = LineCounter::default();
    let mut buf = [0u8; 8192];

    loop {
        let read = reader.read(&mut buf)?;
        if read == 0 {
            break;
        }
        counter = counter.feed(&buf[..read]);
    }

    Ok(counter.finish())
}

/// Count the lines in a file, treating any read failure as an empty file.
pub fn count_file_or_zero(path: &Path) -> u64 {
    match count_file(path) {
        Ok(lines) => lines,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable file counted as 0 lines");
            0
        }
    }
}

/// Incremental counter so files can be read in chunks.
///
/// A `\r` at the end of one chunk followed by `\n` at the start of the
/// next is still one terminator.
#[derive(Debug, Default, Clone, Copy)]
struct LineCounter {
    lines: u64,
    /// Bytes have been seen since the last terminator
    pending: bool,
    /// The previous byte was a `\r`
    after_cr: bool,
}

impl LineCounter {
    fn feed(mut self, bytes: &[u8]) -> Self {
        for &byte in bytes {
            match byte {
                b'\n' if self.after_cr => {
                    // second half of \r\n, already counted
                    self.after_cr = false;
                }
                b'\n' => {
                    self.lines += 1;
                    self.pending = false;
                }
                b'\r' => {
                    self.lines += 1;
                    self.pending = false;
                    self.after_cr = true;
                }
                _ => {
                    self.pending = true;
                    self.after_cr = false;
                }
            }
        }
        self
    }

    fn finish(self) -> u64 {
        if self.pending {
            self.lines + 1
        } else {
            self.lines
        }
    }
}
