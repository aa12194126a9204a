// dirzip-cli/src/cli.rs

use clap::Parser;

use dirzip_common::{ToolConfig, DEFAULT_VERBOSITY};

#[derive(Parser, Debug)]
#[command(name = "dirzip")]
#[command(about = "dirzip: zip a directory or unzip an archive, replacing the destination", long_about = None)]
pub struct Cli {
    /// Highest diagnostic level printed (0 = silent, 1-5 = errors, 6 = warnings, 7 = info, 8 = debug, 9 = trace)
    #[arg(long, default_value_t = DEFAULT_VERBOSITY)]
    pub verbosity: u8,

    /// Fail instead of deleting an existing destination
    #[arg(long)]
    pub keep_existing: bool,

    /// Deflate every file, including already-compressed formats
    #[arg(long)]
    pub no_skip: bool,

    /// Command word followed by its arguments, e.g. `zip <source> <destination>`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn config(&self) -> ToolConfig {
        ToolConfig {
            verbosity: self.verbosity,
            replace: !self.keep_existing,
            skip_compression: !self.no_skip,
        }
    }
}

/// An option clap does not know in the command position is treated like an
/// unrecognized command word: the usage text is shown instead of an error.
pub fn falls_back_to_help(err: &clap::Error) -> bool {
    err.kind() == clap::error::ErrorKind::UnknownArgument
}
