//! Prefix tree over the restricted symbol set
//!
//! Words are stored as paths from the root. Every node lives in a single arena,
//! children are `NodeId` handles, and traversals use an explicit stack so
//! deep words never grow the call stack.

use super::node::{NodeId, SYMBOL_COUNT, TrieNode, slot_symbol, symbol_index};
use crate::core::{has_repeated_letters, letter_pattern};

/// Longest admissible word length ("intergouvernementalisations")
pub const MAX_WORD_LENGTH: usize = 27;

/// A trie-backed word list
#[derive(Debug, Clone)]
pub struct Lexicon {
    nodes: Vec<TrieNode>,
    size: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create an empty lexicon
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            size: 0,
        }
    }

    /// Number of stored words
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Check whether the lexicon holds no words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of nodes in the arena, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a word
    ///
    /// Characters outside `a`-`z`, `-` and `'` are skipped. Inserting a word that is
    /// already present leaves the lexicon unchanged.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::lexicon::Lexicon;
    ///
    /// let mut lexicon = Lexicon::new();
    /// lexicon.insert_word("tire-bouchon");
    /// lexicon.insert_word("a+b+c");
    /// lexicon.insert_word("tire-bouchon");
    ///
    /// assert_eq!(lexicon.size(), 2);
    /// assert!(lexicon.contains_word("abc"));
    /// ```
    pub fn insert_word(&mut self, word: &str) {
        let mut current = NodeId::ROOT;

        for slot in word.chars().filter_map(symbol_index) {
            current = match self.node(current).child(slot) {
                Some(child) => child,
                None => {
                    let child = NodeId::from_index(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.index()].set_child(slot, child);
                    child
                }
            };
        }

        if self.nodes[current.index()].mark_terminal() {
            self.size += 1;
        }
    }

    /// Check whether a word is stored
    ///
    /// The empty word is present only if it was inserted.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.find(word)
            .is_some_and(|node| self.node(node).is_terminal())
    }

    /// Check whether some stored word starts with `prefix`
    ///
    /// The empty prefix always returns `false`, even when the lexicon holds the
    /// empty word.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::lexicon::Lexicon;
    ///
    /// let mut lexicon = Lexicon::new();
    /// lexicon.insert_word("aujourd'hui");
    ///
    /// assert!(lexicon.contains_prefix("aujourd'"));
    /// assert!(!lexicon.contains_prefix("hui"));
    /// assert!(!lexicon.contains_prefix(""));
    /// ```
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.find(prefix).is_some()
    }

    /// List every stored word starting with `prefix`, in alphabetical order
    ///
    /// The empty prefix lists the whole lexicon.
    #[must_use]
    pub fn words(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(start) = self.find(prefix) {
            self.collect(start, prefix.to_string(), None, &mut words);
        }
        words
    }

    /// List every stored word of exactly `length` characters, in alphabetical order
    ///
    /// Lengths of 0 or above [`MAX_WORD_LENGTH`] return an empty list without
    /// touching the tree.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::lexicon::Lexicon;
    ///
    /// let lexicon: Lexicon = ["bus", "aide", "as", "but", "aux"].into_iter().collect();
    /// assert_eq!(lexicon.words_of_length(3), vec!["aux", "bus", "but"]);
    /// assert!(lexicon.words_of_length(0).is_empty());
    /// ```
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<String> {
        let mut words = Vec::new();
        if length == 0 || length > MAX_WORD_LENGTH {
            return words;
        }
        self.collect(
            NodeId::ROOT,
            String::with_capacity(length),
            Some(length),
            &mut words,
        );
        words
    }

    /// Check whether any character occurs more than once in `word`
    #[must_use]
    pub fn has_repeated_letters(word: &str) -> bool {
        has_repeated_letters(word)
    }

    /// Compute the repeated-letter signature of `word`
    #[must_use]
    pub fn letter_pattern(word: &str) -> String {
        letter_pattern(word)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// Follow `path` from the root, character by character
    fn find(&self, path: &str) -> Option<NodeId> {
        path.chars()
            .try_fold(NodeId::ROOT, |node, ch| self.node(node).child_for(ch))
    }

    /// Depth-first walk below `start`, pushing complete words onto `words`
    ///
    /// `path` holds the characters spelling `start` and is extended and shrunk as
    /// the walk descends and backtracks. With `exact` set, only words of that total
    /// length are emitted and the walk never descends past it.
    fn collect(
        &self,
        start: NodeId,
        mut path: String,
        exact: Option<usize>,
        words: &mut Vec<String>,
    ) {
        let base = path.chars().count();
        let accepts = |depth: usize| exact.is_none_or(|length| depth == length);

        if self.node(start).is_terminal() && accepts(base) {
            words.push(path.clone());
        }

        // Each frame is a node plus the next child slot to visit
        let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];

        while let Some(&(node, slot)) = stack.last() {
            let top = stack.len() - 1;
            let depth = base + top;
            let exhausted = slot == SYMBOL_COUNT || exact.is_some_and(|length| depth >= length);

            if exhausted {
                stack.pop();
                if !stack.is_empty() {
                    path.pop();
                }
                continue;
            }

            stack[top].1 += 1;
            if let Some(child) = self.node(node).child(slot) {
                path.push(slot_symbol(slot));
                if self.node(child).is_terminal() && accepts(depth + 1) {
                    words.push(path.clone());
                }
                stack.push((child, 0));
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        lexicon.extend(iter);
        lexicon
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert_word(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 9] = ["aide", "as", "au", "aux", "bu", "bus", "but", "et", "ete"];

    fn sample() -> Lexicon {
        WORDS.into_iter().collect()
    }

    #[test]
    fn empty_lexicon() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.size(), 0);
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.node_count(), 1);
        assert!(lexicon.words("").is_empty());
    }

    #[test]
    fn insert_counts_each_word_once() {
        let mut lexicon = Lexicon::new();
        for (i, word) in WORDS.iter().enumerate() {
            lexicon.insert_word(word);
            assert_eq!(lexicon.size(), i + 1, "word {word} not inserted");
            lexicon.insert_word(word);
            assert_eq!(lexicon.size(), i + 1, "word {word} counted twice");
        }
    }

    #[test]
    fn inserted_words_are_found() {
        let lexicon = sample();
        for word in WORDS {
            assert!(lexicon.contains_word(word), "word {word} not found");
        }
    }

    #[test]
    fn absent_words_are_not_found() {
        let lexicon = sample();
        for word in ["", "aid", "ai", "aides", "mot", "e"] {
            assert!(!lexicon.contains_word(word), "absent word {word} found");
        }
    }

    #[test]
    fn lookups_with_invalid_characters_fail() {
        let lexicon = sample();
        assert!(!lexicon.contains_word("AIDE"));
        assert!(!lexicon.contains_word("ai de"));
        assert!(!lexicon.contains_prefix("A"));
        assert!(lexicon.words("B").is_empty());
    }

    #[test]
    fn insert_skips_invalid_characters() {
        let mut lexicon = Lexicon::new();
        lexicon.insert_word("hel15lo");
        lexicon.insert_word("he^^ll$o");

        assert_eq!(lexicon.size(), 1);
        assert_eq!(lexicon.words(""), vec!["hello"]);
        assert!(!lexicon.contains_word("hel15lo"));
    }

    #[test]
    fn insert_filtered_word_matches_clean_word() {
        let mut lexicon = Lexicon::new();
        lexicon.insert_word("a+b+c");
        assert!(lexicon.contains_word("abc"));
        assert_eq!(lexicon.words_of_length(3), vec!["abc"]);

        lexicon.insert_word("abc");
        assert_eq!(lexicon.size(), 1);
    }

    #[test]
    fn empty_word_is_stored_at_root() {
        let mut lexicon = Lexicon::new();
        assert!(!lexicon.contains_word(""));

        lexicon.insert_word("");
        assert!(lexicon.contains_word(""));
        assert_eq!(lexicon.size(), 1);
        assert_eq!(lexicon.words(""), vec![""]);

        lexicon.insert_word("");
        assert_eq!(lexicon.size(), 1);
    }

    #[test]
    fn word_of_only_invalid_characters_is_empty_word() {
        let mut lexicon = Lexicon::new();
        lexicon.insert_word("123");
        assert!(lexicon.contains_word(""));
        assert_eq!(lexicon.size(), 1);
    }

    #[test]
    fn words_by_prefix() {
        let lexicon = sample();
        assert_eq!(lexicon.words(""), WORDS.to_vec());
        assert!(lexicon.words("x").is_empty());
        assert_eq!(lexicon.words("bu"), vec!["bu", "bus", "but"]);
        assert_eq!(lexicon.words("aux"), vec!["aux"]);
        assert!(lexicon.words("auxx").is_empty());
    }

    #[test]
    fn words_with_hyphen_and_apostrophe() {
        let lexicon: Lexicon = ["aujourd'hui", "tire-bouchon"].into_iter().collect();
        assert_eq!(lexicon.words("a"), vec!["aujourd'hui"]);
        assert_eq!(lexicon.words("tire"), vec!["tire-bouchon"]);
        assert_eq!(lexicon.words("tire-"), vec!["tire-bouchon"]);
    }

    #[test]
    fn symbols_sort_after_letters() {
        let lexicon: Lexicon = ["a'b", "a-b", "azb"].into_iter().collect();
        assert_eq!(lexicon.words(""), vec!["azb", "a-b", "a'b"]);
    }

    #[test]
    fn words_are_alphabetical_regardless_of_insertion_order() {
        let shuffled = ["bus", "aide", "as", "but", "au", "aux", "ete", "bu", "et"];
        let lexicon: Lexicon = shuffled.into_iter().collect();

        assert_eq!(lexicon.words(""), WORDS.to_vec());
        assert_eq!(lexicon.words_of_length(3), vec!["aux", "bus", "but", "ete"]);
    }

    #[test]
    fn words_of_length() {
        let lexicon = sample();
        assert_eq!(lexicon.words_of_length(2), vec!["as", "au", "bu", "et"]);
        assert_eq!(lexicon.words_of_length(3), vec!["aux", "bus", "but", "ete"]);
        assert_eq!(lexicon.words_of_length(4), vec!["aide"]);
        assert!(lexicon.words_of_length(5).is_empty());
    }

    #[test]
    fn words_of_length_with_symbols() {
        let lexicon: Lexicon = ["aujourd'hui", "tire-bouchon"].into_iter().collect();
        assert!(lexicon.words_of_length(10).is_empty());
        assert_eq!(lexicon.words_of_length(11), vec!["aujourd'hui"]);
        assert_eq!(lexicon.words_of_length(12), vec!["tire-bouchon"]);
    }

    #[test]
    fn words_of_length_out_of_range() {
        let mut lexicon = sample();
        lexicon.insert_word("");
        let longest = "intergouvernementalisations";
        let too_long = "intergouvernementalisationsx";
        lexicon.insert_word(longest);
        lexicon.insert_word(too_long);

        assert!(lexicon.words_of_length(0).is_empty());
        assert_eq!(lexicon.words_of_length(MAX_WORD_LENGTH), vec![longest]);
        assert!(lexicon.words_of_length(MAX_WORD_LENGTH + 1).is_empty());
        assert!(lexicon.words_of_length(35).is_empty());
    }

    #[test]
    fn length_counts_sum_to_size() {
        let lexicon = sample();
        let total: usize = (0..=MAX_WORD_LENGTH)
            .map(|n| lexicon.words_of_length(n).len())
            .sum();
        assert_eq!(total, lexicon.size());
        assert_eq!(lexicon.words("").len(), lexicon.size());
    }

    #[test]
    fn prefix_lookup() {
        let lexicon: Lexicon = ["aujourd'hui", "tire-bouchon"].into_iter().collect();

        assert!(lexicon.contains_prefix("aujourd'hui"));
        assert!(!lexicon.contains_prefix("aujourd'huz"));
        assert!(lexicon.contains_prefix("a"));
        assert!(!lexicon.contains_prefix(""));
        assert!(lexicon.contains_prefix("tire-"));
        assert!(!lexicon.contains_prefix("bouchon"));
        assert!(lexicon.contains_prefix("tire-bouchon"));
        assert!(!lexicon.contains_prefix("tire-bouchons"));
    }

    #[test]
    fn empty_prefix_is_false_even_with_empty_word() {
        let mut lexicon = Lexicon::new();
        lexicon.insert_word("");
        assert!(lexicon.contains_word(""));
        assert!(!lexicon.contains_prefix(""));
    }

    #[test]
    fn very_long_word_does_not_overflow() {
        let word = "ab".repeat(50_000);
        let mut lexicon = Lexicon::new();
        lexicon.insert_word(&word);

        assert!(lexicon.contains_word(&word));
        assert_eq!(lexicon.words("ab"), vec![word]);
        assert!(lexicon.words_of_length(5).is_empty());
    }

    #[test]
    fn nodes_are_shared_between_prefixes() {
        let lexicon: Lexicon = ["bu", "bus", "but"].into_iter().collect();
        // root, b, u, s, t
        assert_eq!(lexicon.node_count(), 5);
    }

    #[test]
    fn extend_adds_words() {
        let mut lexicon = sample();
        lexicon.extend(["zoo", "aide"]);
        assert_eq!(lexicon.size(), WORDS.len() + 1);
        assert!(lexicon.contains_word("zoo"));
    }

    #[test]
    fn pattern_helpers() {
        assert!(Lexicon::has_repeated_letters("pomme"));
        assert!(!Lexicon::has_repeated_letters("monde"));
        assert_eq!(Lexicon::letter_pattern("pomme"), "abccd");
        assert_eq!(Lexicon::letter_pattern("monde"), "abcde");
    }
}
