use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Matrix(matrix::MatrixArgs),
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
}

impl Commands {
    pub fn run(self) -> crate::CliResult<String> {
        match self {
            Commands::Matrix(args) => args.run(),
            Commands::Encode(args) => args.run(),
            Commands::Decode(args) => args.run(),
        }
    }
}
