//! Edit pipeline: load the target, run the engine, persist or report.
//!
//! The file is read completely before anything else happens. For write and
//! delete the target is then checked for writability, the new content is
//! computed in memory, and only then is the file overwritten. A failure at
//! any step ends the run with the file untouched.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::engine;
use crate::error::OptfileError;
use crate::settings::Settings;
use crate::store::{self, LineStore};
use crate::types::EditAction;

/// Result of an edit. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResult {
    /// Values for the requested keys, in requested order, as raw file bytes.
    Values { entries: Vec<(String, Vec<u8>)> },
    /// Confirmation that pairs were written.
    Written {
        path: PathBuf,
        replaced: Vec<String>,
        appended: Vec<String>,
    },
    /// Confirmation that keys were deleted.
    Deleted { path: PathBuf, removed: usize },
}

impl fmt::Display for EditResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditResult::Values { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key}={}", String::from_utf8_lossy(value))?;
                }
                Ok(())
            }
            EditResult::Written {
                path,
                replaced,
                appended,
            } => write!(
                f,
                "Wrote {}: replaced [{}], appended [{}]",
                path.display(),
                replaced.join(", "),
                appended.join(", ")
            ),
            EditResult::Deleted { path, removed } => {
                write!(f, "Deleted {removed} line(s) from {}", path.display())
            }
        }
    }
}

impl EditResult {
    /// Write the primary output: one value per line for a read, nothing
    /// otherwise. Values go out exactly as they appear in the file.
    pub fn print_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        if let EditResult::Values { entries } = self {
            for (_, value) in entries {
                out.write_all(value)?;
                out.write_all(b"\n")?;
            }
        }
        out.flush()
    }
}

/// Apply `action` to the file named by `settings`.
pub fn apply(settings: &Settings, action: &EditAction) -> Result<EditResult, OptfileError> {
    let path = settings.target()?;
    debug!("File to parse: {}", path.display());
    echo_request(action);

    let lines = LineStore::load(path)?;
    info!("Mode: {}", action.mode());

    let result = match action {
        EditAction::Read { keys } => {
            let entries = engine::read_values(&lines, keys);
            for (key, value) in &entries {
                debug!("{key}={}", String::from_utf8_lossy(value));
            }
            EditResult::Values { entries }
        }
        EditAction::Write { pairs } => {
            store::check_writable(path)?;
            let outcome = engine::write_pairs(&lines, pairs);
            outcome.store.persist(path)?;
            EditResult::Written {
                path: path.to_path_buf(),
                replaced: outcome.replaced,
                appended: outcome.appended,
            }
        }
        EditAction::Delete { keys } => {
            store::check_writable(path)?;
            let outcome = engine::delete_keys(&lines, keys);
            outcome.store.persist(path)?;
            EditResult::Deleted {
                path: path.to_path_buf(),
                removed: outcome.removed,
            }
        }
    };

    if !matches!(result, EditResult::Values { .. }) {
        info!("{result}");
    }
    Ok(result)
}

fn echo_request(action: &EditAction) {
    match action {
        EditAction::Write { pairs } => {
            let listed: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            debug!("Keys to set: [{}]", listed.join(", "));
        }
        EditAction::Read { keys } | EditAction::Delete { keys } => {
            let listed: Vec<&str> = keys.iter().collect();
            debug!("Keys to read/delete: [{}]", listed.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{SAMPLE, keys, option_file, pairs};
    use confique::Config;
    use std::fs;

    fn settings_for(path: PathBuf) -> Settings {
        let mut settings = Settings::builder().load().unwrap();
        settings.file = Some(path);
        settings
    }

    #[test]
    fn read_does_not_modify_file() {
        let (_dir, path) = option_file(SAMPLE);
        let action = EditAction::Read {
            keys: keys(&["a", "b", "c"]),
        };

        let result = apply(&settings_for(path.clone()), &action).unwrap();

        let mut out = Vec::new();
        result.print_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
    }

    #[test]
    fn write_persists_scenario() {
        let (_dir, path) = option_file(SAMPLE);
        let action = EditAction::Write {
            pairs: pairs(&[("a", "10"), ("c", "3")]),
        };

        let result = apply(&settings_for(path.clone()), &action).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "a=10\n#a=99\nb=2\nc=3\n"
        );
        assert!(matches!(
            result,
            EditResult::Written { ref replaced, ref appended, .. }
                if replaced == &["a"] && appended == &["c"]
        ));
    }

    #[test]
    fn write_twice_is_stable() {
        let (_dir, path) = option_file(SAMPLE);
        let settings = settings_for(path.clone());
        let action = EditAction::Write {
            pairs: pairs(&[("a", "10"), ("c", "3")]),
        };

        apply(&settings, &action).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        apply(&settings, &action).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn delete_persists_scenario() {
        let (_dir, path) = option_file(SAMPLE);
        let action = EditAction::Delete { keys: keys(&["a"]) };

        let result = apply(&settings_for(path.clone()), &action).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "#a=99\nb=2\n");
        assert!(matches!(result, EditResult::Deleted { removed: 1, .. }));
    }

    #[test]
    fn missing_target_is_io_error() {
        let (dir, _path) = option_file("");
        let action = EditAction::Write {
            pairs: pairs(&[("a", "1")]),
        };

        let result = apply(&settings_for(dir.path().join("absent.cfg")), &action);
        assert!(matches!(result, Err(OptfileError::IoError { .. })));
        assert!(!dir.path().join("absent.cfg").exists());
    }

    #[test]
    fn write_into_empty_file() {
        let (_dir, path) = option_file("");
        let action = EditAction::Write {
            pairs: pairs(&[("a", "1")]),
        };
        apply(&settings_for(path.clone()), &action).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a=1\n");
    }

    #[test]
    fn delete_adds_trailing_newline() {
        let (_dir, path) = option_file("a=1\nb=2");
        let action = EditAction::Delete { keys: keys(&["a"]) };
        apply(&settings_for(path.clone()), &action).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "b=2\n");
    }

    #[test]
    fn write_keeps_non_utf8_comment() {
        let (_dir, path) = option_file(b"# caf\xe9 settings\na=1\n");
        let action = EditAction::Write {
            pairs: pairs(&[("a", "2")]),
        };

        apply(&settings_for(path.clone()), &action).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"# caf\xe9 settings\na=2\n");
    }

    #[test]
    fn read_prints_non_utf8_value_verbatim() {
        let (_dir, path) = option_file(b"name=Jos\xe9\n");
        let action = EditAction::Read {
            keys: keys(&["name"]),
        };

        let result = apply(&settings_for(path), &action).unwrap();

        let mut out = Vec::new();
        result.print_to(&mut out).unwrap();
        assert_eq!(out, b"Jos\xe9\n");
        assert_eq!(format!("{result}"), "name=Jos\u{fffd}");
    }

    #[test]
    fn print_to_is_silent_for_edits() {
        let result = EditResult::Deleted {
            path: "x.cfg".into(),
            removed: 2,
        };
        let mut out = Vec::new();
        result.print_to(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn values_display_format() {
        let result = EditResult::Values {
            entries: vec![
                ("host".into(), b"localhost".to_vec()),
                ("port".into(), Vec::new()),
            ],
        };
        assert_eq!(format!("{result}"), "host=localhost\nport=");
    }

    #[test]
    fn written_display_format() {
        let result = EditResult::Written {
            path: "opts.cfg".into(),
            replaced: vec!["a".into()],
            appended: vec!["b".into(), "c".into()],
        };
        assert_eq!(
            format!("{result}"),
            "Wrote opts.cfg: replaced [a], appended [b, c]"
        );
    }
}
