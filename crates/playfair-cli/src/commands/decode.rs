use clap::Args;

use crate::CliResult;

/// Decode a string using the given keyword
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Keyword the text was encoded with
    #[arg(value_name = "keyword")]
    pub keyword: String,

    /// Cipher text
    #[arg(value_name = "cipher text")]
    pub text: String,
}

impl DecodeArgs {
    pub fn run(self) -> CliResult<String> {
        let decoded = playfair_core::commands::decode(&self.keyword, &self.text)?;
        Ok(format!("{}\n", decoded))
    }
}
