//! `cellcoord` command-line tool.
//!
//! ```sh
//! cellcoord parse e4 a1A
//! cellcoord format 255 255 255
//! cellcoord validate a0
//! RUST_LOG=debug cellcoord components aa10
//! ```

use std::{io, process::ExitCode};

use cellcoord_cli::{Cli, run};
use clap::Parser as _;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("running {:?}", cli.command);

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&cli.command, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            log::error!("failed to write output: {e}");
            eprintln!("cellcoord: {e}");
            ExitCode::FAILURE
        }
    }
}
