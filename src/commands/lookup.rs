//! Word lookup command
//!
//! Reports what the lexicon knows about a single word.

use crate::lexicon::Lexicon;

/// Result of looking up a word
pub struct LookupResult {
    pub word: String,
    pub is_word: bool,
    pub is_prefix: bool,
    pub pattern: String,
    pub has_repeated_letters: bool,
    /// Stored words of the same length and letter pattern, alphabetical
    pub same_pattern: Vec<String>,
}

/// Look up `word` in the lexicon
#[must_use]
pub fn lookup_word(word: &str, lexicon: &Lexicon) -> LookupResult {
    let pattern = Lexicon::letter_pattern(word);

    let same_pattern = lexicon
        .words_of_length(word.chars().count())
        .into_iter()
        .filter(|candidate| Lexicon::letter_pattern(candidate) == pattern)
        .collect();

    LookupResult {
        word: word.to_string(),
        is_word: lexicon.contains_word(word),
        is_prefix: lexicon.contains_prefix(word),
        has_repeated_letters: Lexicon::has_repeated_letters(word),
        pattern,
        same_pattern,
    }
}
