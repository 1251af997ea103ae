//! Dictionary-based alphabet refinement
//!
//! The solver walks the cryptogram words longest first. For each one it takes the
//! alphabetically first dictionary word with the same length and letter pattern,
//! merges the implied letter correspondences into the best alphabet so far, and
//! keeps the result only if more cryptogram words then decode to known words.

use super::cryptogram::Cryptogram;
use super::dictionary::Dictionary;
use super::substitution::apply_substitution;
use crate::core::{Alphabet, InvalidInput, letter_pattern};
use log::{debug, trace};

/// Tuning knobs for the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Cryptogram words shorter than this are ignored (default: 3)
    pub min_word_length: usize,
    /// Drop a word from scoring once any alphabet decodes it (default: false)
    ///
    /// When unset a decoded word only leaves the work queue and keeps counting
    /// towards every later score.
    pub retire_solved_words: bool,
}

impl SolverConfig {
    /// Create a solver configuration
    #[must_use]
    pub const fn new(min_word_length: usize, retire_solved_words: bool) -> Self {
        Self {
            min_word_length,
            retire_solved_words,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(3, false)
    }
}

/// An accepted alphabet change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Improvement {
    /// Cryptogram word that was matched
    pub cipher_word: String,
    /// Dictionary word it was matched to
    pub plain_word: String,
    /// Alphabet adopted after the match
    pub alphabet: Alphabet,
    /// Score of the adopted alphabet
    pub score: usize,
}

/// Outcome of a refinement run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Best alphabet found
    pub alphabet: Alphabet,
    /// Score of the best alphabet
    pub score: usize,
    /// Score of the starting alphabet
    pub baseline_score: usize,
    /// Queue words taken for matching
    pub words_considered: usize,
    /// Queue words for which a pattern-compatible dictionary word existed
    pub words_matched: usize,
    /// Accepted changes, in order
    pub improvements: Vec<Improvement>,
}

/// Greedy substitution solver over a dictionary
pub struct Solver<'a, D: Dictionary> {
    dictionary: &'a D,
    cryptogram: Cryptogram,
    config: SolverConfig,
}

impl<'a, D: Dictionary> Solver<'a, D> {
    /// Create a solver for a cryptogram with the default configuration
    ///
    /// # Errors
    /// Returns `InvalidInput::EmptyCryptogram` if `cryptogram` is empty.
    pub fn new(cryptogram: &str, dictionary: &'a D) -> Result<Self, InvalidInput> {
        Self::with_config(cryptogram, dictionary, SolverConfig::default())
    }

    /// Create a solver for a cryptogram
    ///
    /// # Errors
    /// Returns `InvalidInput::EmptyCryptogram` if `cryptogram` is empty.
    pub fn with_config(
        cryptogram: &str,
        dictionary: &'a D,
        config: SolverConfig,
    ) -> Result<Self, InvalidInput> {
        let cryptogram = Cryptogram::new(cryptogram, config.min_word_length)?;
        debug!(
            "Cryptogram has {} qualifying words (min length {})",
            cryptogram.words().len(),
            config.min_word_length
        );

        Ok(Self {
            dictionary,
            cryptogram,
            config,
        })
    }

    /// Get the preprocessed cryptogram
    #[must_use]
    pub const fn cryptogram(&self) -> &Cryptogram {
        &self.cryptogram
    }

    /// Get the solver configuration
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Refine `start` into an approximated decoding alphabet
    ///
    /// Consumes the work queue; a second call on the same solver only scores `start`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `start` is not 26 ASCII characters.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::cipher::{Solver, apply_substitution};
    /// use lexicrypt::lexicon::Lexicon;
    ///
    /// let lexicon: Lexicon = ["pomme"].into_iter().collect();
    /// let mut solver = Solver::new("TJOOM", &lexicon).unwrap();
    ///
    /// let alphabet = solver
    ///     .guess_approximated_alphabet("ABCDEFGHIJKLMNOPQRSTUVWXYZ")
    ///     .unwrap();
    /// assert_eq!(apply_substitution("TJOOM", &alphabet).unwrap(), "POMME");
    /// ```
    pub fn guess_approximated_alphabet(&mut self, start: &str) -> Result<Alphabet, InvalidInput> {
        self.analyze(start).map(|analysis| analysis.alphabet)
    }

    /// Refine `start` and report how the result was reached
    ///
    /// # Errors
    /// Returns `InvalidInput` if `start` is not 26 ASCII characters.
    pub fn analyze(&mut self, start: &str) -> Result<Analysis, InvalidInput> {
        let start = Alphabet::new(start)?;

        let baseline_score = self.decryption_quality(&start);
        debug!("Start alphabet {start} scores {baseline_score}");

        let mut best = start;
        let mut best_score = baseline_score;
        let mut improvements = Vec::new();
        let mut words_considered = 0;
        let mut words_matched = 0;

        // Dictionary words of the current length, paired with their patterns
        let mut cached_length = 0;
        let mut candidates: Vec<(String, String)> = Vec::new();

        while let Some(cipher_word) = self.cryptogram.pop_longest() {
            words_considered += 1;

            let length = cipher_word.chars().count();
            if length != cached_length {
                candidates = self
                    .dictionary
                    .words_of_length(length)
                    .into_iter()
                    .map(|word| {
                        let pattern = letter_pattern(&word);
                        (word, pattern)
                    })
                    .collect();
                cached_length = length;
            }

            let pattern = letter_pattern(&cipher_word);
            let Some((plain_word, _)) = candidates.iter().find(|(_, p)| *p == pattern) else {
                trace!("No dictionary word matches pattern {pattern} of {cipher_word}");
                continue;
            };
            words_matched += 1;

            let candidate = best.merge(&cipher_word, plain_word);
            if candidate == best {
                continue;
            }

            let score = self.decryption_quality(&candidate);
            if score > best_score {
                debug!("{cipher_word} -> {plain_word}: {candidate} scores {score} (was {best_score})");
                best = candidate;
                best_score = score;
                improvements.push(Improvement {
                    cipher_word: cipher_word.clone(),
                    plain_word: plain_word.clone(),
                    alphabet: candidate,
                    score,
                });
            }
        }

        Ok(Analysis {
            alphabet: best,
            score: best_score,
            baseline_score,
            words_considered,
            words_matched,
            improvements,
        })
    }

    /// Count the cryptogram words that decode to dictionary words under `alphabet`
    ///
    /// Decoded words leave the work queue, and with
    /// [`SolverConfig::retire_solved_words`] also leave later scoring.
    pub fn decryption_quality(&mut self, alphabet: &Alphabet) -> usize {
        let dictionary = self.dictionary;
        let retire = self.config.retire_solved_words;

        self.cryptogram.score(
            |word| {
                apply_substitution(word, alphabet)
                    .is_ok_and(|decoded| dictionary.contains_word(&decoded.to_ascii_lowercase()))
            },
            retire,
        )
    }
}
