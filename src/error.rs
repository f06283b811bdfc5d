use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptfileError {
    #[error("READ, WRITE and DELETE can not be used together")]
    ConflictingModes,

    #[error("Please specify a mode: READ, WRITE or DELETE")]
    MissingMode,

    #[error("Please specify a file path")]
    MissingFilePath,

    #[error("Wrong format of options - Expected <key> | Got '{0}'")]
    MalformedKey(String),

    #[error("Wrong format to set key - Expected <key>=<value> | Got '{0}'")]
    MalformedPair(String),

    #[error("Specify at least one key to READ, WRITE or DELETE")]
    EmptyKeySet,

    #[error("Failed to open {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    ConfigError(#[from] confique::Error),
}

impl OptfileError {
    /// Whether the error stems from how the tool was invoked rather than
    /// from the environment. Usage errors are reported together with help text.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            OptfileError::ConflictingModes
                | OptfileError::MissingMode
                | OptfileError::MissingFilePath
                | OptfileError::MalformedKey(_)
                | OptfileError::MalformedPair(_)
                | OptfileError::EmptyKeySet
        )
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() { 2 } else { 1 }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OptfileError::IoError {
            path: path.into(),
            source,
        }
    }
}
