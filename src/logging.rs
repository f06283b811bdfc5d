//! Diagnostic output. Everything goes to stderr; stdout carries only the
//! values printed by a read.

use tracing::Level;

use crate::settings::Settings;

/// Parse a level name, case-insensitive. Unknown names fall back to `WARN`.
pub fn parse_level(name: &str) -> Level {
    match name.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Effective level: verbose forces `DEBUG`.
pub fn level_for(settings: &Settings) -> Level {
    if settings.verbose {
        Level::DEBUG
    } else {
        parse_level(&settings.log_level)
    }
}

/// Install the global stderr subscriber. A second call is a no-op.
pub fn init(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(settings))
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use confique::Config;

    #[test]
    fn parse_known_levels() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("INFO"), Level::INFO);
        assert_eq!(parse_level("Error"), Level::ERROR);
    }

    #[test]
    fn unknown_level_is_warn() {
        assert_eq!(parse_level("loud"), Level::WARN);
    }

    #[test]
    fn verbose_forces_debug() {
        let mut settings = Settings::builder().load().unwrap();
        settings.log_level = "error".into();
        assert_eq!(level_for(&settings), Level::ERROR);
        settings.verbose = true;
        assert_eq!(level_for(&settings), Level::DEBUG);
    }
}
