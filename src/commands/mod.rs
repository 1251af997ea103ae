//! Command implementations

pub mod bench;
pub mod decode;
pub mod encode;
pub mod lookup;
pub mod words;

pub use bench::{BenchConfig, BenchResult, run_bench};
pub use decode::{Comparison, DecodeConfig, DecodeResult, decode_text};
pub use encode::{EncodeResult, encode_text};
pub use lookup::{LookupResult, lookup_word};
pub use words::{WordQuery, WordsResult, list_words};
