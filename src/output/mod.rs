//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_bench_result, print_decode_result, print_encode_result, print_lookup_result,
    print_words_result,
};
