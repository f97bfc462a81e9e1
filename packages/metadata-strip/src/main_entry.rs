// Main Entry Point
//
// Command line front end for the `ngo` binary: one input file in, the
// stripped source on stdout.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::config::StripOptions;
use crate::logging::{ConsoleLogger, LogLevel, Logger};
use crate::strip::{strip_file, PlaceholderStyle};

/// Parsed command line.
#[derive(Debug, Clone)]
pub struct CliInvocation {
    pub file: PathBuf,
    pub options: StripOptions,
}

impl CliInvocation {
    /// Build the invocation from parsed arguments. Flags override values from
    /// the config file.
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let file = matches
            .get_one::<PathBuf>("file")
            .cloned()
            .context("missing input file")?;

        let mut options = match matches.get_one::<PathBuf>("config") {
            Some(path) => StripOptions::load(path)?,
            None => StripOptions::default(),
        };
        if matches.get_flag("preserve-lines") {
            options.placeholder_style = PlaceholderStyle::PreserveLines;
        }
        if matches.get_flag("strict-imports") {
            options.strict_import_binding = true;
        }

        Ok(Self { file, options })
    }
}

pub fn command() -> Command {
    Command::new("ngo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip Angular decorator metadata from compiled JavaScript")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Compiled JavaScript file to strip"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("JSON file with strip options"),
        )
        .arg(
            Arg::new("preserve-lines")
                .long("preserve-lines")
                .action(ArgAction::SetTrue)
                .help("Keep line breaks of removed code so line numbers do not shift"),
        )
        .arg(
            Arg::new("strict-imports")
                .long("strict-imports")
                .action(ArgAction::SetTrue)
                .help("Only match decorator factories imported from the target module"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(LogLevel::NAMES)
                .default_value("warn")
                .help("Diagnostics written to stderr"),
        )
}

/// Strip the invocation's file and return the rewritten source.
pub fn run(invocation: &CliInvocation, logger: &dyn Logger) -> anyhow::Result<String> {
    let output = strip_file(&invocation.file, &invocation.options, logger)?;
    Ok(output.code)
}

/// Main entry point for `ngo`.
///
/// # Returns
/// Exit code (0 for success, non-zero for failure). Nothing is written to
/// stdout unless the whole file was processed.
pub fn main_fn<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    let log_level = matches
        .get_one::<String>("log-level")
        .and_then(|level| level.parse().ok())
        .unwrap_or_default();
    let logger = ConsoleLogger::new(log_level);

    let code = match CliInvocation::from_matches(&matches).and_then(|inv| run(&inv, &logger)) {
        Ok(code) => code,
        Err(err) => {
            logger.error(&format!("{:#}", err));
            return 1;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(code.as_bytes()).and_then(|_| stdout.flush()) {
        logger.error(&format!("failed to write output: {}", err));
        return 1;
    }
    0
}
