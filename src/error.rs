//! Error types for tavutin operations.

use thiserror::Error;

/// Errors that can occur around hyphenation.
///
/// Hyphenation itself never fails; these cover decoding input bytes and the
/// file handling done by the command-line tool.
#[derive(Error, Debug)]
pub enum Error {
    #[error("input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Encoding { valid_up_to: usize },

    #[error("unsupported input encoding: {0} (only UTF-8 is accepted)")]
    UnsupportedEncoding(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
