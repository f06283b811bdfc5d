//! `optfile` command-line tool.
//!
//! ```sh
//! optfile -f app.cfg -r host port
//! optfile -f app.cfg -w port=9090 debug=true
//! optfile -f app.cfg -d debug
//! ```

use clap::{CommandFactory, Parser};

use optfile::{EditArgs, Optfile, OptfileError, logging, settings};

/// Edit a file of <key>=<value> lines in place.
#[derive(Parser, Debug)]
#[command(name = "optfile", version)]
struct Cli {
    #[command(flatten)]
    edit: EditArgs,
}

fn run(cli: Cli) -> Result<(), OptfileError> {
    let settings = Optfile::builder()
        .cli_file(cli.edit.file.clone())
        .cli_verbose(cli.edit.verbose)
        .load()?;
    logging::init(&settings);

    if cli.edit.config_template {
        print!("{}", settings::generate_template());
        return Ok(());
    }

    let action = cli.edit.into_action()?;
    let result = optfile::apply(&settings, &action)?;
    result
        .print_to(std::io::stdout().lock())
        .map_err(|e| OptfileError::IoError {
            path: "<stdout>".into(),
            source: e,
        })
}

fn main() {
    // Bare invocation prints usage and succeeds.
    if std::env::args_os().len() < 2 {
        eprintln!("{}", Cli::command().render_help());
        return;
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("[optfile] {e}");
        if e.is_usage() {
            eprintln!("{}", Cli::command().render_help());
        }
        std::process::exit(e.exit_code());
    }
}
