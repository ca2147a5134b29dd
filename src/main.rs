mod cli;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use cli::Args;
use fastasplit::{split_fasta, Error, TerminalPrompt};

/// Exit status when the operator declines the confirmation prompt
const EXIT_DECLINED: u8 = 2;

fn run(args: &Args) -> Result<()> {
    let config = args.config()?;
    if args.full && !args.every {
        warn!("--fullhead only applies with --every and is ignored");
    }
    split_fasta(&config, TerminalPrompt)
        .with_context(|| format!("Failed to split {}", config.input))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logger(args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let declined = err
                .downcast_ref::<Error>()
                .is_some_and(Error::is_user_aborted);
            if declined {
                ExitCode::from(EXIT_DECLINED)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
