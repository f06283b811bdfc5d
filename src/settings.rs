//! Settings of the tool itself, as opposed to the option file it edits.
//!
//! Loaded through confique from, in ascending priority: compiled defaults, a
//! TOML config file, and `OPTFILE_*` environment variables. The builder then
//! applies command-line overrides on top (see [`OptfileBuilder`](crate::OptfileBuilder)).

use std::path::{Path, PathBuf};

use confique::Config;

use crate::error::OptfileError;

#[derive(Config, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Option file to edit when none is given on the command line.
    #[config(env = "OPTFILE_FILE")]
    pub file: Option<PathBuf>,

    /// Echo parsed keys and values to stderr.
    #[config(env = "OPTFILE_VERBOSE", default = false)]
    pub verbose: bool,

    /// Diagnostic level when not verbose: debug, info, warn or error.
    #[config(env = "OPTFILE_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Settings {
    /// The option file to operate on.
    pub fn target(&self) -> Result<&Path, OptfileError> {
        self.file.as_deref().ok_or(OptfileError::MissingFilePath)
    }
}

/// Commented TOML template listing every setting with its default.
pub fn generate_template() -> String {
    confique::toml::template::<Settings>(confique::toml::FormatOptions::default())
}
