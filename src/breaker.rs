// File: src/breaker.rs
use crate::core::alphabet::Alphabet;
use crate::core::caesar;
use crate::core::frequency::FrequencyProfile;
use crate::core::types::{Score, Shift};

/// Outcome of a breaking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakResult {
    /// Encoding shift that best explains the ciphertext, in `[0, period)`.
    pub shift: Shift,
    /// Sum of squared deviations for `shift`. Lower is a better fit.
    pub score: Score,
    pub plaintext: String,
}

/// Recovers Caesar shifts by comparing a ciphertext's symbol counts against
/// a reference profile of the expected plaintext language.
///
/// For every candidate shift `s` the expected count of symbol `c` is the
/// reference count of the symbol that encodes to `c` under `s`. The candidate
/// with the smallest sum of squared differences wins; on equal scores the
/// smaller shift is kept. Reference symbols that are absent count as zero.
pub struct CaesarBreaker<'a> {
    alphabet: &'a Alphabet,
    reference: &'a FrequencyProfile,
}

impl<'a> CaesarBreaker<'a> {
    pub fn new(alphabet: &'a Alphabet, reference: &'a FrequencyProfile) -> Self {
        Self { alphabet, reference }
    }

    /// Deviation between `observed` and the reference aligned to `shift`.
    pub fn score(&self, observed: &FrequencyProfile, shift: Shift) -> Score {
        self.alphabet
            .symbols()
            .map(|c| {
                let expected = self.reference.get(self.alphabet.shift(c, -shift));
                let d = Score::from(observed.get(c).abs_diff(expected));
                d * d
            })
            .sum()
    }

    /// Scores of every candidate shift, indexed by shift.
    pub fn scores(&self, ciphertext: &str) -> Vec<Score> {
        self.scan(&FrequencyProfile::count(self.alphabet, ciphertext))
    }

    pub fn break_text(&self, ciphertext: &str) -> BreakResult {
        let observed = FrequencyProfile::count(self.alphabet, ciphertext);
        let scores = self.scan(&observed);

        let mut best: Option<(Shift, Score)> = None;
        for (shift, &score) in (0..).zip(&scores) {
            log::debug!("shift {shift}: deviation {score}");
            if best.map_or(true, |(_, best_score)| score < best_score) {
                best = Some((shift, score));
            }
        }
        // The alphabet is never empty, so there is always a candidate.
        let (shift, score) = best.unwrap_or((0, 0));

        log::info!(
            "Recovered Caesar shift {shift} (deviation {score}, {} symbols observed)",
            observed.total()
        );
        BreakResult {
            shift,
            score,
            plaintext: caesar::decode(self.alphabet, ciphertext, shift),
        }
    }

    /// Scores `observed` against every shift in `[0, period)`.
    fn scan(&self, observed: &FrequencyProfile) -> Vec<Score> {
        (0..self.alphabet.period() as Shift)
            .map(|shift| self.score(observed, shift))
            .collect()
    }
}

/// One-shot form of [`CaesarBreaker::break_text`].
pub fn break_caesar(
    alphabet: &Alphabet,
    ciphertext: &str,
    reference: &FrequencyProfile,
) -> BreakResult {
    CaesarBreaker::new(alphabet, reference).break_text(ciphertext)
}
