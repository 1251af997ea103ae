//! Cryptogram decoding command
//!
//! Runs the solver on a ciphertext and decodes a preview with the result.

use crate::cipher::{Analysis, Dictionary, Solver, SolverConfig, apply_substitution};
use crate::core::{Alphabet, InvalidInput, PLAIN_LETTERS};
use std::time::{Duration, Instant};

/// Configuration for decoding a cryptogram
pub struct DecodeConfig {
    pub start: String,
    pub expected: Option<String>,
    pub preview_length: usize,
    pub solver: SolverConfig,
}

impl DecodeConfig {
    #[must_use]
    pub fn new(start: String) -> Self {
        Self {
            start,
            expected: None,
            preview_length: 200,
            solver: SolverConfig::default(),
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new(PLAIN_LETTERS.to_string())
    }
}

/// Comparison of the found alphabet with a known one
pub struct Comparison {
    pub expected: Alphabet,
    pub mask: String,
    pub mismatches: usize,
}

/// Result of decoding a cryptogram
pub struct DecodeResult {
    pub start: Alphabet,
    pub qualifying_words: usize,
    pub analysis: Analysis,
    pub comparison: Option<Comparison>,
    pub preview: String,
    pub duration: Duration,
}

/// Approximate the decoding alphabet of `text` and decode a preview
///
/// # Errors
///
/// Returns an error if:
/// - The cryptogram text is empty
/// - The start or expected alphabet is not 26 ASCII characters
pub fn decode_text<D: Dictionary>(
    text: &str,
    dictionary: &D,
    config: &DecodeConfig,
) -> Result<DecodeResult, InvalidInput> {
    let start = Alphabet::new(&config.start)?;
    let expected = config
        .expected
        .as_deref()
        .map(Alphabet::new)
        .transpose()?;

    let timer = Instant::now();
    let mut solver = Solver::with_config(text, dictionary, config.solver)?;
    let qualifying_words = solver.cryptogram().words().len();
    let analysis = solver.analyze(start.as_str())?;
    let duration = timer.elapsed();

    let comparison = expected.map(|expected| Comparison {
        mask: analysis.alphabet.differences(&expected),
        mismatches: analysis.alphabet.count_differences(&expected),
        expected,
    });

    let preview = apply_substitution(text, &analysis.alphabet)?
        .chars()
        .take(config.preview_length)
        .collect();

    Ok(DecodeResult {
        start,
        qualifying_words,
        analysis,
        comparison,
        preview,
        duration,
    })
}
