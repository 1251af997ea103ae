//! Lexicrypt
//!
//! A trie-backed lexicon and a dictionary-based solver for monoalphabetic
//! substitution ciphers.
//!
//! # Quick Start
//!
//! ```rust
//! use lexicrypt::cipher::{Solver, apply_substitution};
//! use lexicrypt::core::Alphabet;
//! use lexicrypt::lexicon::Lexicon;
//!
//! let lexicon: Lexicon = ["pomme", "terre", "elle"].into_iter().collect();
//!
//! let key = Alphabet::new("YESUMZRWFNVHOBJTGPCDLAIXQK").unwrap();
//! let cryptogram = apply_substitution("POMME TERRE ELLE", &key).unwrap();
//!
//! let mut solver = Solver::new(&cryptogram, &lexicon).unwrap();
//! let alphabet = solver
//!     .guess_approximated_alphabet("ABCDEFGHIJKLMNOPQRSTUVWXYZ")
//!     .unwrap();
//!
//! let decoded = apply_substitution(&cryptogram, &alphabet).unwrap();
//! assert_eq!(decoded, "POMME TERRE ELLE");
//! ```

// Core domain types
pub mod core;

// Dictionary storage
pub mod lexicon;

// Substitution and solving
pub mod cipher;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
