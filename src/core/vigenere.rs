// File: src/core/vigenere.rs
use crate::core::alphabet::Alphabet;
use crate::core::types::{Direction, Shift};
use crate::error::{CipherError, Result};

/// A keyword resolved against an alphabet into its per-position shifts.
///
/// The shift for a key symbol is that symbol's position within its own cycle
/// of the alphabet, whatever the case of the text character it is applied to.
/// With `latin-cased` both `K` and `k` shift by 10. With the single-cycle
/// `latin` preset `B` shifts by 1 and `b` by 27.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    shifts: Vec<Shift>,
}

impl VigenereKey {
    pub fn new(alphabet: &Alphabet, key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        let shifts = key
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                alphabet
                    .position(symbol)
                    .map(|i| i as Shift)
                    .ok_or(CipherError::SymbolNotInAlphabet { symbol, position })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { shifts })
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Applies the key to `text`. The key position only advances on alphabet
    /// members; passthrough characters do not consume a key symbol.
    pub fn apply(&self, alphabet: &Alphabet, text: &str, direction: Direction) -> String {
        let mut cycle = self.shifts.iter().cycle();
        text.chars()
            .map(|c| {
                if !alphabet.contains(c) {
                    return c;
                }
                match cycle.next() {
                    Some(&step) => alphabet.shift(c, direction.sign() * step),
                    None => c,
                }
            })
            .collect()
    }
}

pub fn encode(alphabet: &Alphabet, text: &str, key: &str) -> Result<String> {
    let key = VigenereKey::new(alphabet, key)?;
    Ok(key.apply(alphabet, text, Direction::Encode))
}

pub fn decode(alphabet: &Alphabet, text: &str, key: &str) -> Result<String> {
    let key = VigenereKey::new(alphabet, key)?;
    Ok(key.apply(alphabet, text, Direction::Decode))
}
