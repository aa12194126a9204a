use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use dirzip_common::{CleanupKind, OpError, ToolConfig, UnzipReport, ZipReport};
use dirzip_compress::zip_dir;
use dirzip_decompress::unzip_archive;

use crate::diag;

pub const HELP_TEXT: &str = "Commands:\n\
- zip <source> <destination>\t\tE.g.: \"zip\" \"./docs\" \"./docs.zip\"\n\
- unzip <source> <destination>\t\tE.g.: \"unzip\" \"./docs.zip\" \"./docs\"\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Zip,
    Unzip,
    Help,
    Unrecognized(String),
}

impl Command {
    /// Command words are matched without regard to case.
    pub fn parse(word: &str) -> Command {
        if word.eq_ignore_ascii_case("zip") {
            Command::Zip
        } else if word.eq_ignore_ascii_case("unzip") {
            Command::Unzip
        } else if word.eq_ignore_ascii_case("help") {
            Command::Help
        } else {
            Command::Unrecognized(word.to_string())
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{command} needs a source and a destination, got {found} argument(s)")]
    MissingArgument { command: String, found: usize },
}

#[derive(Debug)]
pub enum Outcome {
    HelpShown,
    Zipped(ZipReport),
    Unzipped(UnzipReport),
    Failed(OpError),
    Aborted(DispatchError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::HelpShown | Outcome::Zipped(_) | Outcome::Unzipped(_))
    }
}

/// Runs one invocation. `args` are the words after the program name and any
/// options. Progress, results and help go to `out`; only a failure to write
/// to `out` is returned as an error.
///
/// Help is printed for no arguments, `help`, unknown commands and missing
/// source/destination arguments, never after a zip or unzip that ran.
pub fn run<W: Write>(args: &[String], config: &ToolConfig, out: &mut W) -> io::Result<Outcome> {
    let word = args.first().map(String::as_str).unwrap_or("help");
    let command = Command::parse(word);

    let outcome = match command {
        Command::Help | Command::Unrecognized(_) => {
            out.write_all(HELP_TEXT.as_bytes())?;
            return Ok(Outcome::HelpShown);
        }
        Command::Zip | Command::Unzip => match (args.get(1), args.get(2)) {
            (Some(source), Some(destination)) => {
                if command == Command::Zip {
                    zip(source, destination, config, out)?
                } else {
                    unzip(source, destination, config, out)?
                }
            }
            _ => {
                let err = DispatchError::MissingArgument {
                    command: word.to_string(),
                    found: args.len().saturating_sub(1),
                };
                diag::error(
                    "dispatch",
                    &format!("Could not execute command {}", word),
                    &format!("Inner error: {}", err),
                );
                out.write_all(HELP_TEXT.as_bytes())?;
                Outcome::Aborted(err)
            }
        },
    };

    Ok(outcome)
}

fn zip<W: Write>(source: &str, destination: &str, config: &ToolConfig, out: &mut W) -> io::Result<Outcome> {
    writeln!(out, "Zipping {}:", source)?;
    match zip_dir(Path::new(source), Path::new(destination), config) {
        Ok(report) => {
            writeln!(out, " - {} created with success!", destination)?;
            Ok(Outcome::Zipped(report))
        }
        Err(e) => {
            report_failure(&e, out)?;
            Ok(Outcome::Failed(e))
        }
    }
}

fn unzip<W: Write>(source: &str, destination: &str, config: &ToolConfig, out: &mut W) -> io::Result<Outcome> {
    writeln!(out, "Unzipping {}:", source)?;
    match unzip_archive(Path::new(source), Path::new(destination), config) {
        Ok(report) => {
            writeln!(out, " - {} created with success!", destination)?;
            Ok(Outcome::Unzipped(report))
        }
        Err(e) => {
            report_failure(&e, out)?;
            Ok(Outcome::Failed(e))
        }
    }
}

fn report_failure<W: Write>(err: &OpError, out: &mut W) -> io::Result<()> {
    match err {
        OpError::InvalidPath { .. } => writeln!(out, " - Invalid parameters."),
        OpError::DestinationExists { .. } => writeln!(out, " - Destination already exists."),
        OpError::CleanupFailed { kind, source, .. } => {
            writeln!(out, " - Error: {}", source)?;
            match kind {
                CleanupKind::File => writeln!(out, " - Could not remove file."),
                CleanupKind::Directory => writeln!(out, " - Could not remove directory."),
            }
        }
        OpError::SourceNotFound { .. } | OpError::Archive { .. } => writeln!(out, " - Error: {}", err),
    }
}
