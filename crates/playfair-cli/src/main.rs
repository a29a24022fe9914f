use std::process::ExitCode;

use clap::Parser;
use playfair_core::PlayfairError;

use crate::cli::CliArgs;

mod cli;
mod commands {
    pub mod decode;
    pub mod encode;
    pub mod matrix;
}

pub type CliResult<T> = Result<T, PlayfairError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    log::debug!("{:?}", args);

    match args.command.run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{:?}", e.root_cause());
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
