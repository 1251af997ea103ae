//! Word lookup interface used by the solver

use crate::lexicon::Lexicon;

/// A word source the solver can query
pub trait Dictionary {
    /// Check whether `word` is a known word
    fn contains_word(&self, word: &str) -> bool;

    /// List the known words of exactly `length` characters, in a stable order
    fn words_of_length(&self, length: usize) -> Vec<String>;
}

impl Dictionary for Lexicon {
    fn contains_word(&self, word: &str) -> bool {
        Self::contains_word(self, word)
    }

    fn words_of_length(&self, length: usize) -> Vec<String> {
        Self::words_of_length(self, length)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains_word(&self, word: &str) -> bool {
        (**self).contains_word(word)
    }

    fn words_of_length(&self, length: usize) -> Vec<String> {
        (**self).words_of_length(length)
    }
}
