//! Word listing command

use crate::lexicon::Lexicon;

/// Which words to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordQuery {
    /// Words starting with a prefix (the empty prefix lists everything)
    Prefix(String),
    /// Words of exactly this many characters
    Length(usize),
}

/// Result of listing words
pub struct WordsResult {
    pub query: WordQuery,
    pub words: Vec<String>,
}

/// List the lexicon words matching `query`, in alphabetical order
#[must_use]
pub fn list_words(lexicon: &Lexicon, query: WordQuery) -> WordsResult {
    let words = match &query {
        WordQuery::Prefix(prefix) => lexicon.words(prefix),
        WordQuery::Length(length) => lexicon.words_of_length(*length),
    };

    WordsResult { query, words }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        ["bus", "but", "buse", "as", "aide"].into_iter().collect()
    }

    #[test]
    fn list_by_prefix() {
        let result = list_words(&lexicon(), WordQuery::Prefix("bu".to_string()));
        assert_eq!(result.words, vec!["bus", "buse", "but"]);
        assert_eq!(result.query, WordQuery::Prefix("bu".to_string()));
    }

    #[test]
    fn list_everything() {
        let result = list_words(&lexicon(), WordQuery::Prefix(String::new()));
        assert_eq!(result.words, vec!["aide", "as", "bus", "buse", "but"]);
    }

    #[test]
    fn list_by_length() {
        let result = list_words(&lexicon(), WordQuery::Length(4));
        assert_eq!(result.words, vec!["aide", "buse"]);
    }

    #[test]
    fn list_unknown_prefix() {
        let result = list_words(&lexicon(), WordQuery::Prefix("zz".to_string()));
        assert!(result.words.is_empty());
    }
}
