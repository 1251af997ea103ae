//! Display functions for command results

use super::formatters::{format_duration, score_bar, spaced};
use crate::commands::{BenchResult, DecodeResult, EncodeResult, LookupResult, WordQuery, WordsResult};
use crate::core::{Alphabet, PLAIN_LETTERS};
use colored::Colorize;

/// How many same-pattern words a lookup prints before summarizing
const MAX_LISTED: usize = 20;

fn print_banner(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    if subject.is_empty() {
        println!(" {} ", title.bright_cyan().bold());
    } else {
        println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.bright_yellow().bold()
        );
    }
    println!("{}", "═".repeat(60).cyan());
}

fn print_mapping(label: &str, alphabet: &Alphabet) {
    println!("   {label:<10} {}", spaced(PLAIN_LETTERS).bright_black());
    println!("   {:<10} {}", "", spaced(alphabet.as_str()).bright_yellow());
}

fn yes_no(value: bool) -> colored::ColoredString {
    if value { "yes".green() } else { "no".red() }
}

/// Print the result of decoding a cryptogram
pub fn print_decode_result(result: &DecodeResult, verbose: bool) {
    let analysis = &result.analysis;
    print_banner("DECODING", "");

    println!("\n🔎 {}", "Cryptogram:".bright_cyan().bold());
    println!("   Qualifying words: {}", result.qualifying_words);
    println!("   Start alphabet:   {}", result.start);
    println!(
        "   Score:            [{}] {} → {}",
        score_bar(analysis.score, result.qualifying_words, 30).green(),
        analysis.baseline_score,
        format!("{}", analysis.score).bright_yellow().bold()
    );
    println!(
        "   Words matched:    {}/{}",
        analysis.words_matched, analysis.words_considered
    );
    println!("   Time taken:       {}", format_duration(result.duration));

    if verbose && !analysis.improvements.is_empty() {
        println!("\n📈 {}", "Improvements:".bright_cyan().bold());
        for (i, step) in analysis.improvements.iter().enumerate() {
            println!(
                "   {:2}. {} → {}  {} (score {})",
                i + 1,
                step.cipher_word,
                step.plain_word.to_uppercase().green(),
                step.alphabet,
                step.score
            );
        }
    }

    println!("\n🔑 {}", "Alphabet:".bright_cyan().bold());
    print_mapping("Decoding", &analysis.alphabet);

    if let Some(comparison) = &result.comparison {
        println!("   {:<10} {}", "Expected", spaced(comparison.expected.as_str()));
        println!("   {:<10} {}", "", spaced(&comparison.mask).red().bold());
        let summary = format!("{} of 26 letters differ", comparison.mismatches);
        if comparison.mismatches == 0 {
            println!("   {}", summary.green().bold());
        } else {
            println!("   {}", summary.yellow());
        }
    }

    println!("\n📜 {}", "Preview:".bright_cyan().bold());
    for line in result.preview.lines() {
        println!("   {line}");
    }
}

/// Print the result of encoding a text
pub fn print_encode_result(result: &EncodeResult) {
    print_banner("ENCODING", "");

    println!("\n🔑 {}", "Alphabets:".bright_cyan().bold());
    print_mapping("Key", &result.key);
    match &result.decoding {
        Some(decoding) => print_mapping("Decoding", decoding),
        None => println!(
            "   {}",
            "Key is not a permutation, no decoding alphabet".yellow()
        ),
    }

    println!("\n📜 {}", "Ciphertext:".bright_cyan().bold());
    println!("{}", result.ciphertext);
}

/// Print the result of looking up a word
pub fn print_lookup_result(result: &LookupResult) {
    print_banner("LOOKUP:", &result.word);

    println!("\n📖 {}", "Lexicon:".bright_cyan().bold());
    println!("   Word:            {}", yes_no(result.is_word));
    println!("   Prefix:          {}", yes_no(result.is_prefix));
    println!("   Pattern:         {}", result.pattern.bright_yellow());
    println!("   Repeated letter: {}", yes_no(result.has_repeated_letters));

    println!(
        "\n🧩 {} {}",
        "Same pattern:".bright_cyan().bold(),
        result.same_pattern.len()
    );
    for word in result.same_pattern.iter().take(MAX_LISTED) {
        println!("   {word}");
    }
    if result.same_pattern.len() > MAX_LISTED {
        println!(
            "   {}",
            format!("... and {} more", result.same_pattern.len() - MAX_LISTED).bright_black()
        );
    }
}

/// Print a word listing
pub fn print_words_result(result: &WordsResult) {
    let subject = match &result.query {
        WordQuery::Prefix(prefix) if prefix.is_empty() => "all".to_string(),
        WordQuery::Prefix(prefix) => format!("prefix \"{prefix}\""),
        WordQuery::Length(length) => format!("length {length}"),
    };
    print_banner("WORDS:", &subject);

    for word in &result.words {
        println!("{word}");
    }
    println!(
        "\n{}",
        format!("{} words", result.words.len()).bright_black()
    );
}

/// Print the result of a dictionary benchmark
pub fn print_bench_result(result: &BenchResult) {
    print_banner("BENCHMARK RESULTS", "");

    println!("\n📦 {}", "Loading:".bright_cyan().bold());
    println!("   File lines:       {}", result.lines);
    println!(
        "   Distinct words:   {}",
        format!("{}", result.size).bright_yellow().bold()
    );
    println!("   Trie nodes:       {}", result.node_count);
    println!(
        "   Average load:     {} over {} runs",
        format_duration(result.average_load),
        result.load_times.len()
    );

    println!("\n🔎 {}", "Lookups:".bright_cyan().bold());
    println!(
        "   Existing words:   {} ({} not found)",
        format_duration(result.search_time),
        result.missing.len()
    );
    for word in result.missing.iter().take(MAX_LISTED) {
        println!("      {}", word.red());
    }
    println!(
        "   Word + \"xx\":      {} ({} false hits)",
        format_duration(result.negative_time),
        result.false_hits.len()
    );
    for word in result.false_hits.iter().take(MAX_LISTED) {
        println!("      {}", word.red());
    }

    println!("\n📈 {}", "Lengths:".bright_cyan().bold());
    let largest = result
        .length_counts
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);
    for &(length, count) in &result.length_counts {
        println!(
            "   {length:2}: {} {count:7}",
            score_bar(count, largest, 40).green()
        );
    }
    println!("   Time taken:       {}", format_duration(result.length_time));

    let total = format!("Total {} of {} words", result.length_total, result.size);
    if result.lengths_consistent() {
        println!("   {}", total.green().bold());
    } else {
        println!("   {}", total.red().bold());
    }
}
