//! Cryptogram preprocessing
//!
//! Splits cryptogram text into the words worth matching against a dictionary:
//! deduplicated, at least `min_word_length` characters long, and containing a
//! repeated letter (words without one carry no pattern information).

use crate::core::{InvalidInput, has_repeated_letters};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// The qualifying words of a cryptogram
///
/// Holds both the scoring set (first-occurrence order) and the work queue
/// (longest first, ties in first-occurrence order).
#[derive(Debug, Clone)]
pub struct Cryptogram {
    words: Vec<String>,
    queue: VecDeque<String>,
}

impl Cryptogram {
    /// Extract the qualifying words of a cryptogram
    ///
    /// # Errors
    /// Returns `InvalidInput::EmptyCryptogram` if `text` is empty.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::cipher::Cryptogram;
    ///
    /// let cryptogram = Cryptogram::new("ELLE A UNE POMME ET UNE POMME", 3).unwrap();
    /// assert_eq!(cryptogram.words(), ["ELLE", "POMME"]);
    /// assert_eq!(cryptogram.peek_longest(), Some("POMME"));
    /// ```
    pub fn new(text: &str, min_word_length: usize) -> Result<Self, InvalidInput> {
        if text.is_empty() {
            return Err(InvalidInput::EmptyCryptogram);
        }

        let mut seen = FxHashSet::default();
        let words: Vec<String> = text
            .split_whitespace()
            .filter(|token| seen.insert(*token))
            .filter(|token| token.chars().count() >= min_word_length)
            .filter(|token| has_repeated_letters(token))
            .map(str::to_string)
            .collect();

        // Stable sort keeps first-occurrence order among equal lengths
        let mut ordered = words.clone();
        ordered.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));

        Ok(Self {
            words,
            queue: ordered.into(),
        })
    }

    /// Words still taking part in scoring, in first-occurrence order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words still waiting to be matched, longest first
    #[must_use]
    pub const fn queue(&self) -> &VecDeque<String> {
        &self.queue
    }

    /// Number of words still waiting to be matched
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Look at the next word to be matched
    #[must_use]
    pub fn peek_longest(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    /// Take the next word to be matched
    pub fn pop_longest(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Count the scoring words for which `decodes` holds
    ///
    /// Every hit is dropped from the work queue. With `retire` set, hits are also
    /// dropped from the scoring set so later passes skip them.
    pub fn score<F>(&mut self, mut decodes: F, retire: bool) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let hits: FxHashSet<String> = self
            .words
            .iter()
            .filter(|word| decodes(word.as_str()))
            .cloned()
            .collect();

        if hits.is_empty() {
            return 0;
        }

        self.queue.retain(|word| !hits.contains(word));
        if retire {
            self.words.retain(|word| !hits.contains(word));
        }

        hits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            Cryptogram::new("", 3),
            Err(InvalidInput::EmptyCryptogram)
        ));
    }

    #[test]
    fn whitespace_only_text_has_no_words() {
        let cryptogram = Cryptogram::new(" \n\t ", 3).unwrap();
        assert!(cryptogram.words().is_empty());
        assert_eq!(cryptogram.remaining(), 0);
    }

    #[test]
    fn filters_short_and_unrepeated_words() {
        let cryptogram = Cryptogram::new("bonjour les amis aa elle", 3).unwrap();
        assert_eq!(cryptogram.words(), ["bonjour", "elle"]);
    }

    #[test]
    fn min_length_is_configurable() {
        let cryptogram = Cryptogram::new("aa bonjour", 2).unwrap();
        assert_eq!(cryptogram.words(), ["aa", "bonjour"]);
    }

    #[test]
    fn deduplicates_in_first_occurrence_order() {
        let cryptogram = Cryptogram::new("elle pomme elle terre pomme", 3).unwrap();
        assert_eq!(cryptogram.words(), ["elle", "pomme", "terre"]);
    }

    #[test]
    fn queue_is_longest_first_with_stable_ties() {
        let cryptogram = Cryptogram::new("aab ccd xyzz bbc", 3).unwrap();
        let queue: Vec<&str> = cryptogram.queue().iter().map(String::as_str).collect();
        assert_eq!(queue, ["xyzz", "aab", "ccd", "bbc"]);
    }

    #[test]
    fn pop_consumes_queue_only() {
        let mut cryptogram = Cryptogram::new("elle pommme", 3).unwrap();
        assert_eq!(cryptogram.pop_longest().as_deref(), Some("pommme"));
        assert_eq!(cryptogram.pop_longest().as_deref(), Some("elle"));
        assert_eq!(cryptogram.pop_longest(), None);
        assert_eq!(cryptogram.words().len(), 2);
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Three characters, more than three bytes
        let cryptogram = Cryptogram::new("éé ééa", 3).unwrap();
        assert_eq!(cryptogram.words(), ["ééa"]);
    }

    #[test]
    fn score_prunes_queue() {
        let mut cryptogram = Cryptogram::new("elle pomme terre", 3).unwrap();
        let score = cryptogram.score(|word| word != "terre", false);

        assert_eq!(score, 2);
        assert_eq!(cryptogram.words().len(), 3);
        let queue: Vec<&str> = cryptogram.queue().iter().map(String::as_str).collect();
        assert_eq!(queue, ["terre"]);
    }

    #[test]
    fn score_with_retire_prunes_words() {
        let mut cryptogram = Cryptogram::new("elle pomme terre", 3).unwrap();
        assert_eq!(cryptogram.score(|word| word == "pomme", true), 1);
        assert_eq!(cryptogram.words(), ["elle", "terre"]);

        // A retired word is never scored again
        assert_eq!(cryptogram.score(|word| word == "pomme", true), 0);
    }

    #[test]
    fn score_without_hits_changes_nothing() {
        let mut cryptogram = Cryptogram::new("elle pomme", 3).unwrap();
        assert_eq!(cryptogram.score(|_| false, true), 0);
        assert_eq!(cryptogram.words().len(), 2);
        assert_eq!(cryptogram.remaining(), 2);
    }
}
