//! Command-line interface runtime for the Weft structural scanner.
//!
//! The module owns argument parsing, configuration bootstrapping, document
//! loading, and JSON rendering of query results. The runtime is exercised
//! both from the binary entrypoint and from tests, where configuration
//! loading and IO streams can be substituted.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use clap::error::ErrorKind;
use serde::Serialize;
use weft_config::Config;
use weft_scan::{
    BoundaryScanner, LanguageProfile, PLAIN_TEXT, Position, ProfileRegistry, TextDocument,
    language_for_path,
};

mod cli;
mod config;
mod errors;
mod query;
mod telemetry;

use cli::{Cli, Query};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
use config::split_config_arguments;
pub(crate) use errors::AppError;
use query::{QueryResult, execute};

/// One line of output: the query that ran and what it found.
#[derive(Debug, Serialize)]
struct QueryOutput<'a> {
    query: &'a str,
    language: &'a str,
    result: QueryResult,
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&args);

    let cli = match Cli::try_parse_from(&split.query_arguments) {
        Ok(cli) => cli,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = write!(stdout, "{error}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            let _ = write!(stderr, "{}", AppError::CliUsage(error));
            return ExitCode::FAILURE;
        }
    };

    let result = loader
        .load(&split.config_arguments)
        .and_then(|config| {
            telemetry::initialise(&config)?;
            answer(&cli, &config)
        })
        .and_then(|line| writeln!(stdout, "{line}").map_err(AppError::WriteResult));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(stderr, &error),
    }
}

fn report<E: Write>(stderr: &mut E, error: &AppError) -> ExitCode {
    let _ = writeln!(stderr, "error: {error}");
    ExitCode::FAILURE
}

/// Loads the document, runs the query, and renders the JSON output line.
fn answer(cli: &Cli, config: &Config) -> Result<String, AppError> {
    let text = fs::read_to_string(&cli.file).map_err(|source| AppError::ReadDocument {
        path: cli.file.clone(),
        source,
    })?;
    let doc = TextDocument::new(&text);

    let registry = ProfileRegistry::new();
    let profile = registry.get(&language_id(cli.language.as_deref(), &cli.file));
    let mut options = config.scan_options();
    if cli.no_block_comments {
        options = options.with_block_comments(false);
    }
    let scanner = BoundaryScanner::new(&profile).with_options(options);

    let pos = Position::new(cli.line, cli.column);
    let result = execute(cli.query, &scanner, &doc, pos, cli.target)?;
    render(cli.query, &profile, result)
}

fn language_id(explicit: Option<&str>, file: &Path) -> String {
    explicit
        .or_else(|| language_for_path(file))
        .unwrap_or(PLAIN_TEXT)
        .to_owned()
}

fn render(
    query: Query,
    profile: &LanguageProfile,
    result: QueryResult,
) -> Result<String, AppError> {
    let name = query
        .to_possible_value()
        .map(|value| value.get_name().to_owned())
        .unwrap_or_default();
    let output = QueryOutput {
        query: &name,
        language: profile.id(),
        result,
    };
    serde_json::to_string(&output).map_err(AppError::SerialiseResult)
}
