//! Core domain types for substitution ciphers
//!
//! This module contains the fundamental domain types with no dependency on the lexicon.
//! All types here are pure, testable, and have clear mathematical properties.

mod alphabet;
mod error;
mod pattern;

pub use alphabet::{ALPHABET_LEN, Alphabet, PLAIN_LETTERS};
pub use error::InvalidInput;
pub use pattern::{has_repeated_letters, letter_pattern};
