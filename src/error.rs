use std::path::PathBuf;

use thiserror::Error;

use crate::codec::CodecError;

#[derive(Error, Debug)]
pub enum SieveError {
    /// Parent name is malformed or not a star.
    #[error("{0}")]
    Validation(String),

    /// Name could not be parsed or rendered.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Word list could not be read.
    #[error("word list '{}': {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result file could not be written.
    #[error("output '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Interactive input failed or was unavailable.
    #[error("prompt error: {0}")]
    Prompt(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
