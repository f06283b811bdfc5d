use std::path::PathBuf;

use confique::Config;

use crate::error::OptfileError;
use crate::settings::Settings;

/// Names the platform config directory and file.
const APP_NAME: &str = "optfile";

/// Entry point for building optfile settings.
pub struct Optfile;

impl Optfile {
    pub fn builder() -> OptfileBuilder {
        OptfileBuilder::new()
    }
}

/// Builder that resolves [`Settings`] through all layers.
///
/// Layer order, lowest priority first: compiled defaults, the config file,
/// `OPTFILE_*` environment variables, command-line overrides.
pub struct OptfileBuilder {
    config_file: Option<PathBuf>,
    env_enabled: bool,
    cli_file: Option<PathBuf>,
    cli_verbose: bool,
}

impl OptfileBuilder {
    fn new() -> Self {
        Self {
            config_file: None,
            env_enabled: true,
            cli_file: None,
            cli_verbose: false,
        }
    }

    /// Use an explicit config file instead of the platform one.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Disable environment variable loading entirely.
    pub fn no_env(mut self) -> Self {
        self.env_enabled = false;
        self
    }

    /// Target file from the command line. `None` keeps the configured one.
    pub fn cli_file(mut self, file: Option<PathBuf>) -> Self {
        if file.is_some() {
            self.cli_file = file;
        }
        self
    }

    /// Verbose flag from the command line. `false` keeps the configured value.
    pub fn cli_verbose(mut self, verbose: bool) -> Self {
        self.cli_verbose |= verbose;
        self
    }

    /// Resolve the config file location, by default
    /// `{config_dir}/optfile/optfile.toml`.
    fn effective_config_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_file {
            return Some(path.clone());
        }
        let proj = directories::ProjectDirs::from("", "", APP_NAME)?;
        Some(proj.config_dir().join(format!("{APP_NAME}.toml")))
    }

    /// Load and resolve the settings through all layers.
    pub fn load(self) -> Result<Settings, OptfileError> {
        // confique gives earlier sources higher priority
        let mut builder = Settings::builder();
        if self.env_enabled {
            builder = builder.env();
        }
        if let Some(path) = self.effective_config_file() {
            builder = builder.file(path);
        }
        let mut settings = builder.load()?;

        if let Some(file) = self.cli_file {
            settings.file = Some(file);
        }
        if self.cli_verbose {
            settings.verbose = true;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{SAMPLE, keys, option_file};
    use crate::ops::{EditResult, apply};
    use crate::types::EditAction;
    use std::fs;
    use tempfile::TempDir;

    fn isolated() -> (TempDir, OptfileBuilder) {
        let dir = TempDir::new().unwrap();
        let builder = Optfile::builder()
            .no_env()
            .config_file(dir.path().join("optfile.toml"));
        (dir, builder)
    }

    #[test]
    fn platform_config_file_is_named_after_tool() {
        if let Some(path) = Optfile::builder().effective_config_file() {
            assert!(path.ends_with("optfile.toml"));
        }
    }

    #[test]
    fn explicit_config_file_wins() {
        let builder = Optfile::builder().config_file("/tmp/custom.toml");
        assert_eq!(
            builder.effective_config_file(),
            Some(PathBuf::from("/tmp/custom.toml"))
        );
    }

    #[test]
    fn cli_file_overrides_config_file() {
        let (dir, builder) = isolated();
        fs::write(dir.path().join("optfile.toml"), "file = \"from-config.cfg\"\n").unwrap();

        let settings = builder
            .cli_file(Some(PathBuf::from("from-cli.cfg")))
            .load()
            .unwrap();
        assert_eq!(settings.file, Some(PathBuf::from("from-cli.cfg")));
    }

    #[test]
    fn absent_cli_file_keeps_config_file() {
        let (dir, builder) = isolated();
        fs::write(dir.path().join("optfile.toml"), "file = \"from-config.cfg\"\n").unwrap();

        let settings = builder.cli_file(None).load().unwrap();
        assert_eq!(settings.file, Some(PathBuf::from("from-config.cfg")));
    }

    #[test]
    fn cli_verbose_only_turns_on() {
        let (dir, builder) = isolated();
        fs::write(dir.path().join("optfile.toml"), "verbose = true\n").unwrap();

        let settings = builder.cli_verbose(false).load().unwrap();
        assert!(settings.verbose);
    }

    #[test]
    fn loaded_without_file_is_usage_error() {
        let (_dir, builder) = isolated();
        let action = EditAction::Read { keys: keys(&["a"]) };
        let result = apply(&builder.load().unwrap(), &action);
        assert!(matches!(result, Err(OptfileError::MissingFilePath)));
    }

    #[test]
    fn loaded_cli_file_is_the_target() {
        let (_cfg, builder) = isolated();
        let (_dir, path) = option_file(SAMPLE);

        let settings = builder.cli_file(Some(path)).load().unwrap();
        let action = EditAction::Read { keys: keys(&["b"]) };
        let result = apply(&settings, &action).unwrap();
        assert_eq!(
            result,
            EditResult::Values {
                entries: vec![("b".into(), b"2".to_vec())]
            }
        );
    }
}
