//! Read, write and delete keys in flat `key=value` option files, in place.
//!
//! An option file holds one pair per line:
//!
//! ```text
//! # comment lines start with '#'
//! host=example.org
//! port = 8080
//! ```
//!
//! Each invocation performs exactly one of three operations on one file:
//!
//! ```ignore
//! let action = EditAction::from_operands(Mode::Write, ["port=9090", "debug=true"])?;
//! let settings = Optfile::builder()
//!     .cli_file(Some("app.cfg".into()))
//!     .load()?;
//! let result = apply(&settings, &action)?;
//! ```
//!
//! # Matching
//!
//! A line assigns `key` when its first `=` is neither the first nor the last
//! byte and the text before it, trimmed, equals `key`. Values are trimmed
//! when read. Lines starting with `#` are comments and never match anything.
//! Lines that match nothing are never modified: blank lines, stray text and
//! malformed pairs pass through byte for byte. The file does not have to be
//! valid UTF-8; lines are kept and read values are printed as raw bytes.
//!
//! # Operations
//!
//! - **Read** prints one value per requested key, in requested order. When a
//!   key is assigned on several lines the last one wins. A key the file does
//!   not assign reads as an empty value; reads never fail on missing keys.
//! - **Write** replaces the *first* line assigning each key with `key=value`
//!   and appends keys the file does not have yet, in requested order. Later
//!   lines for an already written key are left as they are.
//! - **Delete** removes *every* line assigning each key.
//!
//! Repeated operands collapse to their first occurrence, so `a=1 a=2` writes
//! `a=1`.
//!
//! # Safety of in-place edits
//!
//! The whole file is read into memory, the target is checked for
//! writability, the new content is computed, and only then is the file
//! overwritten. There is no locking: concurrent writers to the same file are
//! not supported.
//!
//! # Settings
//!
//! The tool's own settings come from [`Settings`], resolved by
//! [`Optfile::builder()`] from compiled defaults, `optfile.toml` in the
//! platform config directory, `OPTFILE_*` environment variables and finally
//! command-line overrides. A default target file can be configured there so
//! `-f` may be omitted. `optfile --config-template` prints a commented
//! template of that file.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default) the [`EditArgs`] derive struct
//! provides the `-r | -w | -d`, `-f` and `-v` flags and converts them into an
//! [`EditAction`]. Without it, build [`EditAction`] values directly.
//!
//! # Error handling
//!
//! All fallible operations return [`OptfileError`]. Usage errors (conflicting
//! or missing modes, malformed operands, no file) are distinguished from I/O
//! errors by [`OptfileError::is_usage`].

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
pub mod engine;
pub mod keyset;
pub mod logging;
mod ops;
pub mod settings;
pub mod store;

#[cfg(test)]
mod fixtures;

pub use builder::{Optfile, OptfileBuilder};
#[cfg(feature = "clap")]
pub use cli::EditArgs;
pub use error::OptfileError;
pub use keyset::{KeySet, WriteSet};
pub use ops::{EditResult, apply};
pub use settings::Settings;
pub use store::LineStore;
pub use types::{EditAction, Mode};
