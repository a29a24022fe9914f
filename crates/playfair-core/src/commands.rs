//! One call per command line action: build the cipher from the keyword, run
//! the requested operation, and tag any failure with what was being done.

use crate::error::{Operation, Result};
use crate::Cipher;

fn create_matrix(keyword: &str) -> Result<Cipher> {
    Cipher::new(keyword).map_err(|e| e.context(Operation::CreateMatrix))
}

/// Renders the grid for `keyword`.
pub fn matrix(keyword: &str) -> Result<String> {
    Ok(create_matrix(keyword)?.render())
}

/// Encodes `plain_text` with the grid for `keyword`.
pub fn encode(keyword: &str, plain_text: &str) -> Result<String> {
    create_matrix(keyword)?
        .encode(plain_text)
        .map_err(|e| e.context(Operation::Encode))
}

/// Decodes `cipher_text` with the grid for `keyword`.
pub fn decode(keyword: &str, cipher_text: &str) -> Result<String> {
    create_matrix(keyword)?
        .decode(cipher_text)
        .map_err(|e| e.context(Operation::Decode))
}
