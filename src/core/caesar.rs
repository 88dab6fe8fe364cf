// File: src/core/caesar.rs
use crate::core::alphabet::Alphabet;
use crate::core::types::Shift;

/// Shifts every alphabet symbol of `text` forward by `step`.
pub fn encode(alphabet: &Alphabet, text: &str, step: Shift) -> String {
    // Normalise once so `-step` below can never overflow.
    let step = alphabet.normalize_shift(step) as Shift;
    text.chars().map(|c| alphabet.shift(c, step)).collect()
}

/// Inverse of [`encode`] for the same `step`.
pub fn decode(alphabet: &Alphabet, text: &str, step: Shift) -> String {
    let step = alphabet.normalize_shift(step) as Shift;
    encode(alphabet, text, -step)
}
