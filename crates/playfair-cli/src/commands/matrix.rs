use clap::Args;

use crate::CliResult;

/// Generate the cipher matrix for a keyword
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Keyword with at least 6 distinct letters
    #[arg(value_name = "keyword")]
    pub keyword: String,
}

impl MatrixArgs {
    pub fn run(self) -> CliResult<String> {
        playfair_core::commands::matrix(&self.keyword)
    }
}
