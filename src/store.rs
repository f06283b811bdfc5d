//! The line store: an option file held in memory as its raw lines.
//!
//! Lines are raw bytes split on `\n` only, so a trailing `\r`, bytes that are
//! not valid UTF-8, or any other content stays part of the line and
//! round-trips untouched. Nothing in the store trims or normalizes; trimming
//! only happens inside [`match_key`] and [`value_at`] when a line is
//! interpreted as a key-value pair.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::OptfileError;

/// Separator between key and value.
pub const DELIMITER: char = '=';

/// A line whose first byte is this is a comment.
pub const COMMENT_PREFIX: u8 = b'#';

const DELIMITER_BYTE: u8 = DELIMITER as u8;

/// Ordered lines of an option file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Vec<u8>>,
}

impl LineStore {
    pub fn new(lines: Vec<Vec<u8>>) -> Self {
        Self { lines }
    }

    /// Split file content into lines. A final line without a terminating
    /// newline is kept; empty content yields an empty store.
    pub fn parse(content: impl AsRef<[u8]>) -> Self {
        let content = content.as_ref();
        if content.is_empty() {
            return Self::default();
        }
        let body = content.strip_suffix(b"\n").unwrap_or(content);
        Self {
            lines: body.split(|b| *b == b'\n').map(<[u8]>::to_vec).collect(),
        }
    }

    /// Read every line from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Ok(Self::parse(content))
    }

    /// Load the file at `path`. The handle is closed before this returns.
    pub fn load(path: &Path) -> Result<Self, OptfileError> {
        let file = File::open(path).map_err(|e| OptfileError::io(path, e))?;
        Self::from_reader(file).map_err(|e| OptfileError::io(path, e))
    }

    /// Write every line followed by `\n`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for line in &self.lines {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Overwrite the file at `path` with this store's lines.
    pub fn persist(&self, path: &Path) -> Result<(), OptfileError> {
        let file = File::create(path).map_err(|e| OptfileError::io(path, e))?;
        self.write_to(BufWriter::new(file))
            .map_err(|e| OptfileError::io(path, e))
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Vec<u8>> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The store serialized the way [`persist`](Self::persist) writes it.
    pub fn to_content(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for line in &self.lines {
            out.extend_from_slice(line);
            out.push(b'\n');
        }
        out
    }
}

/// Open `path` for writing without truncating it, then release the handle.
///
/// Run before a write or delete is computed so an unwritable target fails
/// before any work is done.
pub fn check_writable(path: &Path) -> Result<(), OptfileError> {
    OpenOptions::new()
        .write(true)
        .open(path)
        .map(drop)
        .map_err(|e| OptfileError::io(path, e))
}

pub fn is_comment(line: &[u8]) -> bool {
    line.first() == Some(&COMMENT_PREFIX)
}

/// Return the byte index of the delimiter if `line` assigns `key`.
///
/// The line matches when it is not a comment, its first `=` is neither the
/// first nor the last byte, and the bytes before it equal `key` once ASCII
/// whitespace is trimmed.
pub fn match_key(line: &[u8], key: &str) -> Option<usize> {
    if is_comment(line) {
        return None;
    }
    let idx = line.iter().position(|b| *b == DELIMITER_BYTE)?;
    if idx == 0 || idx + 1 == line.len() {
        return None;
    }
    (line[..idx].trim_ascii() == key.as_bytes()).then_some(idx)
}

/// Trimmed value following the delimiter at `idx`.
pub fn value_at(line: &[u8], idx: usize) -> &[u8] {
    line[idx + 1..].trim_ascii()
}

/// Render a pair as a file line.
pub fn format_pair(key: &str, value: &str) -> Vec<u8> {
    format!("{key}{DELIMITER}{value}").into_bytes()
}
