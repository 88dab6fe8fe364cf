// File: src/error.rs
use thiserror::Error;

/// Errors produced by the cipher library.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),

    #[error("Unknown alphabet preset: {0}")]
    UnknownPreset(String),

    #[error("Vigenère key must not be empty")]
    EmptyKey,

    #[error("Key symbol {symbol:?} at position {position} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: char, position: usize },

    #[error("Caesar key must be an integer shift, got {0:?}")]
    InvalidShift(String),

    #[error("Malformed frequency profile at line {line}: {reason}")]
    MalformedProfile { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary profile error: {0}")]
    Binary(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, CipherError>;
