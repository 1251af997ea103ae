//! Dictionary benchmark command
//!
//! Measures loading, membership lookups and length enumeration on a dictionary file.

use crate::lexicon::{Lexicon, MAX_WORD_LENGTH, load_words};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchConfig {
    pub repeats: usize,
    pub show_progress: bool,
}

impl BenchConfig {
    #[must_use]
    pub const fn new(repeats: usize) -> Self {
        Self {
            repeats,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchResult {
    pub lines: usize,
    pub size: usize,
    pub node_count: usize,
    pub load_times: Vec<Duration>,
    pub average_load: Duration,
    pub search_time: Duration,
    /// File words that a lookup did not find
    pub missing: Vec<String>,
    pub negative_time: Duration,
    /// `word + "xx"` lookups that unexpectedly succeeded
    pub false_hits: Vec<String>,
    /// `(length, word count)` for every length with at least one word
    pub length_counts: Vec<(usize, usize)>,
    pub length_total: usize,
    pub length_time: Duration,
}

impl BenchResult {
    /// Check that enumerating by length found every stored word
    #[must_use]
    pub const fn lengths_consistent(&self) -> bool {
        self.length_total == self.size
    }
}

/// Benchmark the lexicon built from the dictionary at `path`
///
/// The lexicon is rebuilt `repeats` times (at least once) to average load time.
///
/// # Errors
///
/// Returns an I/O error if the dictionary file cannot be read.
pub fn run_bench(path: &Path, config: &BenchConfig) -> io::Result<BenchResult> {
    let words = load_words(path)?;

    let mut load_times = Vec::with_capacity(config.repeats.max(1));
    let mut lexicon = Lexicon::new();
    for _ in 0..config.repeats.max(1) {
        let start = Instant::now();
        lexicon = Lexicon::from_file(path);
        load_times.push(start.elapsed());
    }
    let average_load = load_times.iter().sum::<Duration>() / load_times.len() as u32;

    let start = Instant::now();
    let missing: Vec<String> = words
        .par_iter()
        .filter(|word| !lexicon.contains_word(word))
        .cloned()
        .collect();
    let search_time = start.elapsed();

    let start = Instant::now();
    let false_hits: Vec<String> = words
        .par_iter()
        .map(|word| format!("{word}xx"))
        .filter(|word| lexicon.contains_word(word))
        .collect();
    let negative_time = start.elapsed();

    let (length_counts, length_time) = sweep_lengths(&lexicon, config.show_progress);
    let length_total = length_counts.iter().map(|(_, count)| count).sum();

    Ok(BenchResult {
        lines: words.len(),
        size: lexicon.size(),
        node_count: lexicon.node_count(),
        load_times,
        average_load,
        search_time,
        missing,
        negative_time,
        false_hits,
        length_counts,
        length_total,
        length_time,
    })
}

/// Count the words of every length from 0 up to one past the longest storable word
fn sweep_lengths(lexicon: &Lexicon, show_progress: bool) -> (Vec<(usize, usize)>, Duration) {
    let lengths = 0..=MAX_WORD_LENGTH + 1;

    let pb = if show_progress {
        ProgressBar::new(lengths.clone().count() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut counts = Vec::new();
    for length in lengths {
        pb.set_message(format!("length {length}"));
        let count = lexicon.words_of_length(length).len();
        if count > 0 {
            counts.push((length, count));
        }
        pb.inc(1);
    }
    let elapsed = start.elapsed();
    pb.finish_and_clear();

    (counts, elapsed)
}
