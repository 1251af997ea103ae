//! Dictionary storage
//!
//! A prefix tree over 26 lowercase letters, hyphen and apostrophe, with exact lookup,
//! prefix tests and ordered enumeration by prefix or by word length.

pub mod loader;
mod node;
mod trie;

pub use loader::load_words;
pub use node::{SYMBOL_COUNT, SYMBOLS, slot_symbol, symbol_index};
pub use trie::{Lexicon, MAX_WORD_LENGTH};
