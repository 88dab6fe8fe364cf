// File: src/core/frequency.rs
use crate::core::alphabet::Alphabet;
use crate::core::types::{Count, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Occurrence counts of alphabet symbols in a text.
///
/// Serialises as a flat map, e.g. `{"a": 12, "b": 3}`. Symbols that were never
/// seen are absent and read back as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyProfile {
    counts: BTreeMap<Symbol, Count>,
}

impl FrequencyProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every alphabet member of `text`.
    pub fn count(alphabet: &Alphabet, text: &str) -> Self {
        let mut profile = Self::new();
        profile.accumulate(alphabet, text);
        profile
    }

    /// Folds the alphabet members of `text` into this profile.
    pub fn accumulate(&mut self, alphabet: &Alphabet, text: &str) {
        for c in text.chars().filter(|&c| alphabet.contains(c)) {
            self.increment(c);
        }
    }

    /// Counts a stream line by line without holding it in memory.
    pub fn count_reader<R: BufRead>(alphabet: &Alphabet, mut reader: R) -> std::io::Result<Self> {
        let mut profile = Self::new();
        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            profile.accumulate(alphabet, &line);
            line.clear();
        }
        Ok(profile)
    }

    pub fn merge(&mut self, other: &FrequencyProfile) {
        for (&symbol, &count) in &other.counts {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }

    pub fn increment(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    pub fn insert(&mut self, symbol: Symbol, count: Count) -> Option<Count> {
        self.counts.insert(symbol, count)
    }

    pub fn get(&self, symbol: Symbol) -> Count {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn total(&self) -> Count {
        self.counts.values().sum()
    }

    /// Number of distinct symbols present.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Count)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }

    /// Drops every key that is not a member of `alphabet` and returns the
    /// dropped symbols in order.
    pub fn retain_alphabet(&mut self, alphabet: &Alphabet) -> Vec<Symbol> {
        let foreign: Vec<Symbol> = self
            .counts
            .keys()
            .copied()
            .filter(|&c| !alphabet.contains(c))
            .collect();
        for c in &foreign {
            self.counts.remove(c);
        }
        foreign
    }
}

impl FromIterator<(Symbol, Count)> for FrequencyProfile {
    fn from_iter<I: IntoIterator<Item = (Symbol, Count)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::AlphabetPreset;

    #[test]
    fn test_count_ignores_foreign_symbols() {
        let alphabet = Alphabet::from_preset(AlphabetPreset::EnglishLower);
        let profile = FrequencyProfile::count(&alphabet, "Hello, world!");
        assert_eq!(profile.get('l'), 3);
        assert_eq!(profile.get('o'), 2);
        assert_eq!(profile.get('H'), 0);
        assert_eq!(profile.get('z'), 0);
        assert_eq!(profile.total(), 9);
        assert_eq!(profile.len(), 6);
    }

    #[test]
    fn test_accumulate_matches_merge() {
        let alphabet = Alphabet::default();
        let mut folded = FrequencyProfile::count(&alphabet, "Abba");
        folded.accumulate(&alphabet, "Cab");

        let mut merged = FrequencyProfile::count(&alphabet, "Abba");
        merged.merge(&FrequencyProfile::count(&alphabet, "Cab"));

        assert_eq!(folded, merged);
        assert_eq!(folded.get('b'), 3);
        assert_eq!(folded.total(), 7);
    }

    #[test]
    fn test_count_reader_matches_count() {
        let alphabet = Alphabet::default();
        let text = "first line\nsecond Line\n\nlast";
        let streamed = FrequencyProfile::count_reader(&alphabet, text.as_bytes()).unwrap();
        assert_eq!(streamed, FrequencyProfile::count(&alphabet, text));
    }

    #[test]
    fn test_retain_alphabet_reports_dropped_keys() {
        let alphabet = Alphabet::from_preset(AlphabetPreset::EnglishLower);
        let mut profile: FrequencyProfile =
            [('a', 4), ('B', 2), ('c', 1), ('!', 9)].into_iter().collect();
        assert_eq!(profile.retain_alphabet(&alphabet), vec!['!', 'B']);
        assert_eq!(profile.total(), 5);
    }

    #[test]
    fn test_empty_text_gives_empty_profile() {
        let profile = FrequencyProfile::count(&Alphabet::default(), "   123 ");
        assert!(profile.is_empty());
        assert_eq!(profile.total(), 0);
    }
}
