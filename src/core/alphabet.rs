// File: src/core/alphabet.rs
use crate::core::types::{Shift, Symbol};
use crate::error::{CipherError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

const LATIN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = " .,!?;:'\"-()";
const CYRILLIC_UPPER: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
const CYRILLIC_LOWER: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Built-in symbol sets. The ordering of each preset is part of its contract:
/// changing it changes every ciphertext produced with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetPreset {
    /// `a..z`
    EnglishLower,
    /// `A..Z` followed by `a..z`, as one cycle.
    Latin,
    /// `A..Z` and `a..z` as two cycles: shifting keeps the case.
    LatinCased,
    /// `latin`, digits, space and common punctuation.
    Extended,
    /// Russian upper case followed by lower case, `Ё`/`ё` in dictionary order.
    Cyrillic,
    /// `cyrillic` with each case as its own cycle.
    CyrillicCased,
}

impl AlphabetPreset {
    pub const ALL: [AlphabetPreset; 6] = [
        AlphabetPreset::EnglishLower,
        AlphabetPreset::Latin,
        AlphabetPreset::LatinCased,
        AlphabetPreset::Extended,
        AlphabetPreset::Cyrillic,
        AlphabetPreset::CyrillicCased,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlphabetPreset::EnglishLower => "english-lower",
            AlphabetPreset::Latin => "latin",
            AlphabetPreset::LatinCased => "latin-cased",
            AlphabetPreset::Extended => "extended",
            AlphabetPreset::Cyrillic => "cyrillic",
            AlphabetPreset::CyrillicCased => "cyrillic-cased",
        }
    }

    /// The shift cycles of this preset, in alphabet order.
    pub fn cycles(self) -> Vec<String> {
        match self {
            AlphabetPreset::EnglishLower => vec![LATIN_LOWER.to_string()],
            AlphabetPreset::Latin => vec![[LATIN_UPPER, LATIN_LOWER].concat()],
            AlphabetPreset::LatinCased => {
                vec![LATIN_UPPER.to_string(), LATIN_LOWER.to_string()]
            }
            AlphabetPreset::Extended => {
                vec![[LATIN_UPPER, LATIN_LOWER, DIGITS, PUNCTUATION].concat()]
            }
            AlphabetPreset::Cyrillic => vec![[CYRILLIC_UPPER, CYRILLIC_LOWER].concat()],
            AlphabetPreset::CyrillicCased => {
                vec![CYRILLIC_UPPER.to_string(), CYRILLIC_LOWER.to_string()]
            }
        }
    }

    /// The ordered symbols of this preset.
    pub fn symbols(self) -> String {
        self.cycles().concat()
    }
}

impl fmt::Display for AlphabetPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlphabetPreset {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        AlphabetPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| CipherError::UnknownPreset(s.to_string()))
    }
}

/// A contiguous run of the alphabet that shifting wraps within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cycle {
    start: usize,
    len: usize,
}

/// An ordered, finite set of distinct symbols with a symbol -> index lookup.
///
/// The symbols are split into one or more cycles. A shift moves a symbol
/// within its own cycle, so an alphabet built from an upper and a lower case
/// cycle never changes the case of what it shifts. Alphabets built with
/// [`Alphabet::new`] have a single cycle.
///
/// Every cipher and the breaker take an `&Alphabet`; there is no process-wide
/// alphabet. Characters outside the alphabet are valid input everywhere and are
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
    index: HashMap<Symbol, usize>,
    cycles: Vec<Cycle>,
    /// Cycle of each symbol, parallel to `symbols`.
    cycle_of: Vec<usize>,
    period: usize,
}

impl Alphabet {
    /// Builds a single-cycle alphabet from a symbol string, rejecting empty
    /// input and repeated symbols.
    pub fn new(symbols: &str) -> Result<Self> {
        Self::from_symbols(symbols.chars())
    }

    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Result<Self> {
        Self::build(vec![symbols.into_iter().collect()])
    }

    /// Builds an alphabet whose symbols are the concatenation of `cycles`,
    /// each of which shifts independently. Empty cycles are ignored.
    pub fn with_cycles<S: AsRef<str>>(cycles: &[S]) -> Result<Self> {
        Self::build(cycles.iter().map(|c| c.as_ref().chars().collect()).collect())
    }

    pub fn from_preset(preset: AlphabetPreset) -> Self {
        let alphabet = Self::assemble(
            preset.cycles().iter().map(|c| c.chars().collect()).collect(),
        );
        debug_assert_eq!(
            alphabet.index.len(),
            alphabet.symbols.len(),
            "preset {preset} repeats a symbol"
        );
        alphabet
    }

    fn build(cycles: Vec<Vec<Symbol>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for &symbol in cycles.iter().flatten() {
            if !seen.insert(symbol) {
                return Err(CipherError::DuplicateSymbol(symbol));
            }
        }
        if seen.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        Ok(Self::assemble(cycles))
    }

    fn assemble(cycles: Vec<Vec<Symbol>>) -> Self {
        let mut alphabet = Self {
            symbols: Vec::new(),
            index: HashMap::new(),
            cycles: Vec::new(),
            cycle_of: Vec::new(),
            period: 1,
        };
        for cycle in cycles.into_iter().filter(|c| !c.is_empty()) {
            let id = alphabet.cycles.len();
            alphabet.cycles.push(Cycle {
                start: alphabet.symbols.len(),
                len: cycle.len(),
            });
            alphabet.period = lcm(alphabet.period, cycle.len());
            for symbol in cycle {
                alphabet.index.insert(symbol, alphabet.symbols.len());
                alphabet.symbols.push(symbol);
                alphabet.cycle_of.push(id);
            }
        }
        alphabet
    }

    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Smallest shift that maps every symbol back onto itself: the least
    /// common multiple of the cycle lengths.
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn index(&self, symbol: Symbol) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Offset of `symbol` within its own cycle.
    pub fn position(&self, symbol: Symbol) -> Option<usize> {
        self.index(symbol)
            .map(|i| i - self.cycles[self.cycle_of[i]].start)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.index.contains_key(&symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// Reduces any shift amount into `[0, period)`.
    pub fn normalize_shift(&self, amount: Shift) -> usize {
        // Alphabets are tiny, the period always fits in an i64.
        amount.rem_euclid(self.period as Shift) as usize
    }

    /// Moves `symbol` forward by `amount` positions, wrapping around the end
    /// of its cycle. Symbols outside the alphabet come back unchanged.
    pub fn shift(&self, symbol: Symbol, amount: Shift) -> Symbol {
        match self.index.get(&symbol) {
            Some(&i) => {
                let cycle = self.cycles[self.cycle_of[i]];
                let step = amount.rem_euclid(cycle.len as Shift) as usize;
                self.symbols[cycle.start + (i - cycle.start + step) % cycle.len]
            }
            None => symbol,
        }
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::from_preset(AlphabetPreset::Latin)
    }
}

impl From<AlphabetPreset> for Alphabet {
    fn from(preset: AlphabetPreset) -> Self {
        Self::from_preset(preset)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
