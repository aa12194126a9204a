// dirzip-cli/src/main.rs

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use dirzip_cli::{diag, dispatch, falls_back_to_help, Cli, HELP_TEXT};
use dirzip_common::ToolConfig;

// The exit status stays 0 on every path, including bad options and a closed
// stdout; outcomes are reported on the console only.
fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if falls_back_to_help(&e) => {
            let _ = io::stdout().write_all(HELP_TEXT.as_bytes());
            return;
        }
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    let config = cli.config();
    if let Err(e) = diag::init(&config) {
        let _ = writeln!(io::stderr(), "could not install diagnostic logger: {}", e);
    }

    if let Err(e) = run(&cli, &config) {
        diag::error("main", "Could not complete command", &format!("Inner error: {:#}", e));
    }
}

fn run(cli: &Cli, config: &ToolConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let outcome = dispatch::run(&cli.args, config, &mut stdout).context("writing to stdout")?;
    stdout.flush().context("flushing stdout")?;
    log::debug!("finished: success={}", outcome.is_success());
    Ok(())
}
