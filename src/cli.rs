//! Clap adapter for optfile.
//!
//! Compiled only with the `clap` feature (on by default). [`EditArgs`] is a
//! clap derive struct to flatten into an application's parser; its
//! [`into_action()`](EditArgs::into_action) is the only bridge to the
//! framework-agnostic [`EditAction`](crate::EditAction).

use std::path::PathBuf;

use clap::{ArgAction, Args};

use crate::error::OptfileError;
use crate::types::{EditAction, Mode};

/// Clap-derived args for one optfile invocation.
///
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     edit: EditArgs,
/// }
/// ```
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Show more detailed output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the file to edit; its lines have the form <key>=<value>.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Read the value of each <key>.
    #[arg(short, long, action = ArgAction::Count)]
    pub read: u8,

    /// Set each <key>=<value>, appending keys not yet in the file.
    #[arg(short, long, action = ArgAction::Count)]
    pub write: u8,

    /// Delete every line assigning each <key>.
    #[arg(short, long, action = ArgAction::Count)]
    pub delete: u8,

    /// Print a commented settings file template and exit.
    #[arg(long)]
    pub config_template: bool,

    /// Keys for read and delete, <key>=<value> pairs for write.
    #[arg(value_name = "OPERAND")]
    pub operands: Vec<String>,
}

impl EditArgs {
    /// Modes selected on the command line, possibly more than one.
    fn selected_modes(&self) -> Vec<Mode> {
        [
            (self.read, Mode::Read),
            (self.write, Mode::Write),
            (self.delete, Mode::Delete),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(_, mode)| mode)
        .collect()
    }

    /// Convert clap-parsed args into a validated `EditAction`.
    pub fn into_action(self) -> Result<EditAction, OptfileError> {
        let mode = Mode::select(self.selected_modes())?;
        EditAction::from_operands(mode, self.operands)
    }
}
