//! Command-line interface for Hyperlambda
//! Runs the highlighting lexer outside the editor: dump token streams, check files for lexical
//! errors, and query autocomplete.
//!
//! Usage:
//!   hl tokens `<path>` [--format simple|json]     - Print the styled tokens of every line
//!   hl check `<path>`                             - Report the first lexical error (exit 1)
//!   hl complete `<text>` [--column `<n>`]           - List completion candidates
//!
//! Global options: --config `<file>` layers a TOML file over the defaults, --vocabulary `<file>`
//! adds vocabulary files. A path of `-` reads standard input.

mod error;
mod transforms;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use error::CliError;
use hl_config::{HlConfig, Loader};
use hl_lexer::{diagnose, Lexer};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use transforms::{format_diagnostic, render_tokens, AVAILABLE_FORMATS};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("HL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = build_cli().get_matches();
    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

fn build_cli() -> Command {
    Command::new("hl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing and checking Hyperlambda files")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration layered over the built-in defaults"),
        )
        .arg(
            Arg::new("vocabulary")
                .long("vocabulary")
                .global(true)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Extra vocabulary file (JSON array or one name per line)"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the styled tokens of every line")
                .arg(
                    Arg::new("path")
                        .help("Path to the Hyperlambda file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: simple or json")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report the first lexical error, exiting with 1 if there is one")
                .arg(
                    Arg::new("path")
                        .help("Path to the Hyperlambda file, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("complete")
                .about("List vocabulary entries matching the text before the caret")
                .arg(
                    Arg::new("text")
                        .help("The line being edited")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(
                    Arg::new("column")
                        .long("column")
                        .value_parser(value_parser!(usize))
                        .help("Caret column in characters (default: end of text)"),
                ),
        )
}

fn run(matches: &ArgMatches) -> Result<ExitCode, CliError> {
    let config = load_config(matches)?;
    let lexer = config.lexer()?;
    tracing::debug!(
        words = lexer.vocabulary().len(),
        expression_type = lexer.expression_type(),
        "lexer ready"
    );

    match matches.subcommand() {
        Some(("tokens", sub)) => {
            let (_, source) = read_source(sub)?;
            let format = sub
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or(AVAILABLE_FORMATS[0]);
            println!("{}", render_tokens(&lexer, &source, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(("check", sub)) => {
            let (path, source) = read_source(sub)?;
            Ok(handle_check(&lexer, &path, &source))
        }
        Some(("complete", sub)) => {
            let text = sub
                .get_one::<String>("text")
                .map(String::as_str)
                .unwrap_or_default();
            let column = sub
                .get_one::<usize>("column")
                .copied()
                .unwrap_or_else(|| text.chars().count());
            let hints = config.completion.limit(lexer.hints(text, column));
            for candidate in &hints.list {
                println!("{}", candidate);
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::from(2)),
    }
}

fn load_config(matches: &ArgMatches) -> Result<HlConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    let mut config = loader.build()?;
    if let Some(paths) = matches.get_many::<PathBuf>("vocabulary") {
        config.vocabulary.files.extend(paths.cloned());
    }
    Ok(config)
}

fn read_source(matches: &ArgMatches) -> Result<(PathBuf, String), CliError> {
    let path = matches
        .get_one::<String>("path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("-"));
    let source = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
        buffer
    } else {
        std::fs::read_to_string(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?
    };
    Ok((path, source))
}

/// Handle the check command
fn handle_check(lexer: &Lexer, path: &Path, source: &str) -> ExitCode {
    match diagnose(lexer, source) {
        Some(diagnostic) => {
            tracing::debug!(?diagnostic, "lexical error");
            println!("{}", format_diagnostic(path, &diagnostic));
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}
