//! Edit requests, independent of any CLI framework.
//!
//! A caller picks one [`Mode`] and supplies raw operands; [`EditAction::from_operands`]
//! validates them and builds the matching request. The clap adapter converts
//! parsed flags into this, but any front end can construct it directly.

use std::fmt;

use crate::error::OptfileError;
use crate::keyset::{KeySet, WriteSet};
use crate::store::DELIMITER;

/// Which operation an invocation performs. Exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
    Delete,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Read => "READ",
            Mode::Write => "WRITE",
            Mode::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

impl Mode {
    /// Reduce the selected mode flags to a single mode.
    ///
    /// The same mode may be selected more than once; two different modes are
    /// a usage error, and selecting none is too.
    pub fn select(selected: impl IntoIterator<Item = Mode>) -> Result<Mode, OptfileError> {
        let mut mode = None;
        for m in selected {
            match mode {
                Some(current) if current != m => return Err(OptfileError::ConflictingModes),
                _ => mode = Some(m),
            }
        }
        mode.ok_or(OptfileError::MissingMode)
    }
}

/// A validated edit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Read { keys: KeySet },
    Write { pairs: WriteSet },
    Delete { keys: KeySet },
}

impl EditAction {
    /// Build a request from positional operands.
    ///
    /// Read and delete take bare keys; write takes `key=value`. Duplicates
    /// collapse to their first occurrence. At least one operand is required.
    pub fn from_operands<I, S>(mode: Mode, operands: I) -> Result<Self, OptfileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let action = match mode {
            Mode::Read | Mode::Delete => {
                let mut keys = KeySet::new();
                for arg in operands {
                    keys.insert(parse_key(arg.as_ref())?);
                }
                if mode == Mode::Read {
                    EditAction::Read { keys }
                } else {
                    EditAction::Delete { keys }
                }
            }
            Mode::Write => {
                let mut pairs = WriteSet::new();
                for arg in operands {
                    let (key, value) = parse_pair(arg.as_ref())?;
                    pairs.insert(key, value);
                }
                EditAction::Write { pairs }
            }
        };

        if action.is_empty() {
            return Err(OptfileError::EmptyKeySet);
        }
        Ok(action)
    }

    pub fn mode(&self) -> Mode {
        match self {
            EditAction::Read { .. } => Mode::Read,
            EditAction::Write { .. } => Mode::Write,
            EditAction::Delete { .. } => Mode::Delete,
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            EditAction::Read { keys } | EditAction::Delete { keys } => keys.is_empty(),
            EditAction::Write { pairs } => pairs.is_empty(),
        }
    }
}

/// Parse a bare key operand. It must not contain the delimiter.
pub fn parse_key(arg: &str) -> Result<String, OptfileError> {
    let key = arg.trim_ascii();
    if arg.contains(DELIMITER) || key.is_empty() {
        return Err(OptfileError::MalformedKey(arg.to_string()));
    }
    Ok(key.to_string())
}

/// Parse a `key=value` operand, splitting on the first delimiter.
///
/// Both sides are trimmed of ASCII whitespace and must be non-empty after.
pub fn parse_pair(arg: &str) -> Result<(String, String), OptfileError> {
    let malformed = || OptfileError::MalformedPair(arg.to_string());

    let (raw_key, raw_value) = arg.split_once(DELIMITER).ok_or_else(malformed)?;
    let (key, value) = (raw_key.trim_ascii(), raw_value.trim_ascii());
    if key.is_empty() || value.is_empty() {
        return Err(malformed());
    }
    Ok((key.to_string(), value.to_string()))
}
