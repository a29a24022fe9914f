use clap::Args;

use crate::CliResult;

/// Encode a string using the given keyword
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Keyword with at least 6 distinct letters
    #[arg(value_name = "keyword")]
    pub keyword: String,

    /// Plain text, everything but letters is dropped
    #[arg(value_name = "plain text")]
    pub text: String,
}

impl EncodeArgs {
    pub fn run(self) -> CliResult<String> {
        let encoded = playfair_core::commands::encode(&self.keyword, &self.text)?;
        Ok(format!("{}\n", encoded))
    }
}
