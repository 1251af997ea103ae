//! Repeated-letter signatures
//!
//! A letter pattern replaces every distinct character of a word with a label,
//! assigned in order of first appearance starting at `a`:
//! - "pomme" → "abccd"
//! - "monde" → "abcde"
//!
//! Two words of equal length can be mapped onto each other by a monoalphabetic
//! substitution only if their patterns are identical.

use rustc_hash::{FxHashMap, FxHashSet};

/// Compute the letter pattern of a word
///
/// # Examples
/// ```
/// use lexicrypt::core::letter_pattern;
///
/// assert_eq!(letter_pattern("pomme"), "abccd");
/// assert_eq!(letter_pattern("monde"), "abcde");
/// assert_eq!(letter_pattern("TJOOM"), letter_pattern("pomme"));
/// ```
#[must_use]
pub fn letter_pattern(word: &str) -> String {
    let mut labels: FxHashMap<char, char> = FxHashMap::default();
    let mut pattern = String::with_capacity(word.len());

    for ch in word.chars() {
        let next = labels.len() as u32;
        let label = *labels.entry(ch).or_insert_with(|| {
            char::from_u32(u32::from(b'a') + next).unwrap_or(char::REPLACEMENT_CHARACTER)
        });
        pattern.push(label);
    }

    pattern
}

/// Check whether any character occurs more than once in a word
///
/// # Examples
/// ```
/// use lexicrypt::core::has_repeated_letters;
///
/// assert!(has_repeated_letters("pomme"));
/// assert!(!has_repeated_letters("monde"));
/// ```
#[must_use]
pub fn has_repeated_letters(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    word.chars().any(|ch| !seen.insert(ch))
}
