//! Diagnostic log lines in the form
//! `timestamp,component,level-name,numeric-level,message[,detail]`.
//!
//! The component is the record target, so call sites name themselves
//! explicitly (`log::error!(target: "dispatch", ...)`) and library crates
//! show up under their module path.

use std::fmt;
use std::io::Write;

use log::{Level, LevelFilter, SetLoggerError};

use dirzip_common::ToolConfig;

pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

/// Numeric level shown in the log line. Errors sit at 1; everything chattier
/// starts above the default verbosity so a default run only reports errors.
pub fn numeric_level(level: Level) -> u8 {
    match level {
        Level::Error => 1,
        Level::Warn => 6,
        Level::Info => 7,
        Level::Debug => 8,
        Level::Trace => 9,
    }
}

/// Records whose numeric level is at most `verbosity` are printed.
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1..=5 => LevelFilter::Error,
        6 => LevelFilter::Warn,
        7 => LevelFilter::Info,
        8 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn format_line(timestamp: impl fmt::Display, component: &str, level: Level, message: impl fmt::Display) -> String {
    format!("{},{},{},{},{}", timestamp, component, level_name(level), numeric_level(level), message)
}

/// Logs an error with a separate detail column.
pub fn error(component: &str, message: &str, detail: &str) {
    log::error!(target: component, "{},{}", message, detail);
}

/// Installs the diagnostic logger for this process. Output goes to stderr;
/// the environment is not consulted.
pub fn init(config: &ToolConfig) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_filter(config.verbosity))
        .format(|buf, record| {
            let line = format_line(buf.timestamp_millis(), record.target(), record.level(), record.args());
            writeln!(buf, "{}", line)
        })
        .try_init()
}
