//! Argument validation errors
//!
//! Every user-visible failure of the core is an argument-validation failure,
//! reported before any state is touched.

use thiserror::Error;

/// Invalid argument passed to a cipher operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The cryptogram text given to a solver was empty
    #[error("cryptogram text must not be empty")]
    EmptyCryptogram,

    /// An alphabet did not have exactly 26 characters
    #[error("alphabet must be exactly 26 characters, got {0}")]
    AlphabetLength(usize),

    /// An alphabet contained a non-ASCII character
    #[error("alphabet must contain only ASCII characters")]
    NonAsciiAlphabet,

    /// A substitution was applied to empty text
    #[error("cannot apply a substitution to empty text")]
    EmptyText,
}
