// File: src/core/cipher.rs
use crate::core::alphabet::Alphabet;
use crate::core::types::{Direction, Shift};
use crate::core::{caesar, vigenere::VigenereKey};
use crate::error::{CipherError, Result};
use std::fmt;

/// Cipher family selector, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Caesar,
    Vigenere,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Caesar => f.write_str("caesar"),
            CipherKind::Vigenere => f.write_str("vigenere"),
        }
    }
}

/// A fully keyed cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Caesar { shift: Shift },
    Vigenere { key: String },
}

impl Cipher {
    /// Pairs a cipher family with its raw key text: an integer for Caesar,
    /// a keyword for Vigenère.
    pub fn from_kind(kind: CipherKind, key: &str) -> Result<Self> {
        match kind {
            CipherKind::Caesar => key
                .trim()
                .parse::<Shift>()
                .map(|shift| Cipher::Caesar { shift })
                .map_err(|_| CipherError::InvalidShift(key.to_string())),
            CipherKind::Vigenere => Ok(Cipher::Vigenere { key: key.to_string() }),
        }
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Cipher::Caesar { .. } => CipherKind::Caesar,
            Cipher::Vigenere { .. } => CipherKind::Vigenere,
        }
    }

    pub fn apply(&self, alphabet: &Alphabet, text: &str, direction: Direction) -> Result<String> {
        match self {
            Cipher::Caesar { shift } => Ok(match direction {
                Direction::Encode => caesar::encode(alphabet, text, *shift),
                Direction::Decode => caesar::decode(alphabet, text, *shift),
            }),
            Cipher::Vigenere { key } => {
                let key = VigenereKey::new(alphabet, key)?;
                Ok(key.apply(alphabet, text, direction))
            }
        }
    }

    pub fn encode(&self, alphabet: &Alphabet, text: &str) -> Result<String> {
        self.apply(alphabet, text, Direction::Encode)
    }

    pub fn decode(&self, alphabet: &Alphabet, text: &str) -> Result<String> {
        self.apply(alphabet, text, Direction::Decode)
    }
}
