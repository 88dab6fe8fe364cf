// src/core/types.rs

/// A single character the ciphers may operate on.
pub type Symbol = char;

/// Number of occurrences of a symbol in a text.
pub type Count = u64;

/// A signed shift amount. Always reduced modulo the alphabet size before use,
/// so negative and oversized values are both valid.
pub type Shift = i64;

/// Sum-of-squared-deviation between two frequency profiles.
pub type Score = u128;

/// Which way a cipher is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    /// Sign applied to every shift amount in this direction.
    pub fn sign(self) -> Shift {
        match self {
            Direction::Encode => 1,
            Direction::Decode => -1,
        }
    }
}
