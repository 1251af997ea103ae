//! Substitution ciphers and the dictionary-based solver
//!
//! - [`apply_substitution`]: encode or decode a text with an alphabet
//! - [`Cryptogram`]: the qualifying words of a ciphertext
//! - [`Solver`]: greedy refinement of a decoding alphabet against a [`Dictionary`]

mod cryptogram;
mod dictionary;
mod solver;
mod substitution;

pub use cryptogram::Cryptogram;
pub use dictionary::Dictionary;
pub use solver::{Analysis, Improvement, Solver, SolverConfig};
pub use substitution::apply_substitution;
