//! Lexicrypt - CLI
//!
//! Decode monoalphabetic substitution ciphers against a dictionary, encode texts,
//! and inspect or benchmark the dictionary trie.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use lexicrypt::{
    cipher::SolverConfig,
    commands::{
        BenchConfig, DecodeConfig, WordQuery, decode_text, encode_text, list_words, lookup_word,
        run_bench,
    },
    core::{Alphabet, PLAIN_LETTERS},
    lexicon::Lexicon,
    output::{
        print_bench_result, print_decode_result, print_encode_result, print_lookup_result,
        print_words_result,
    },
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "lexicrypt",
    about = "Dictionary-based solver for monoalphabetic substitution ciphers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line
    #[arg(
        short,
        long,
        global = true,
        default_value = "mots/dictionnaire_FR_sans_accents.txt"
    )]
    dictionary: PathBuf,

    /// Log verbosity: -v info, -vv debug, -vvv trace (RUST_LOG overrides)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Approximate the decoding alphabet of a cryptogram file
    Decode {
        /// Cryptogram text file
        file: PathBuf,

        /// Start alphabet (default: identity)
        #[arg(short, long, conflicts_with = "shuffle")]
        start: Option<String>,

        /// Start from a random alphabet
        #[arg(long)]
        shuffle: bool,

        /// Known decoding alphabet to compare the result with
        #[arg(short, long)]
        expected: Option<String>,

        /// Number of decoded characters to preview
        #[arg(short, long, default_value = "200")]
        preview: usize,

        /// Ignore cryptogram words shorter than this
        #[arg(long, default_value = "3")]
        min_length: usize,

        /// Stop scoring words once they decode
        #[arg(long)]
        retire_solved: bool,

        /// Show every accepted alphabet change
        #[arg(long)]
        steps: bool,
    },

    /// Encrypt a text file with a substitution key
    Encode {
        /// Plaintext file
        file: PathBuf,

        /// Key alphabet
        #[arg(short, long, conflicts_with = "random", required_unless_present = "random")]
        alphabet: Option<String>,

        /// Use a random key
        #[arg(short, long)]
        random: bool,
    },

    /// Show what the dictionary knows about a word
    Lookup {
        /// Word to look up
        word: String,
    },

    /// List dictionary words
    Words {
        /// Only words starting with this prefix
        #[arg(short, long, conflicts_with = "length")]
        prefix: Option<String>,

        /// Only words of exactly this length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Benchmark loading and lookups on the dictionary
    Bench {
        /// Number of times to load the dictionary
        #[arg(short = 'n', long, default_value = "10")]
        repeats: usize,
    },
}

/// Install the logger, defaulting to warnings only
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Decode {
            file,
            start,
            shuffle,
            expected,
            preview,
            min_length,
            retire_solved,
            steps,
        } => {
            let start = if shuffle {
                Alphabet::random(&mut rand::rng()).to_string()
            } else {
                start.unwrap_or_else(|| PLAIN_LETTERS.to_string())
            };
            let config = DecodeConfig {
                expected,
                preview_length: preview,
                solver: SolverConfig::new(min_length, retire_solved),
                ..DecodeConfig::new(start)
            };
            run_decode_command(&file, &cli.dictionary, &config, steps)
        }
        Commands::Encode {
            file,
            alphabet,
            random,
        } => run_encode_command(&file, alphabet.as_deref(), random),
        Commands::Lookup { word } => {
            let lexicon = Lexicon::from_file(&cli.dictionary);
            print_lookup_result(&lookup_word(&word, &lexicon));
            Ok(())
        }
        Commands::Words { prefix, length } => {
            let query = match (prefix, length) {
                (_, Some(length)) => WordQuery::Length(length),
                (prefix, None) => WordQuery::Prefix(prefix.unwrap_or_default()),
            };
            let lexicon = Lexicon::from_file(&cli.dictionary);
            print_words_result(&list_words(&lexicon, query));
            Ok(())
        }
        Commands::Bench { repeats } => run_bench_command(&cli.dictionary, repeats),
    }
}

fn run_decode_command(
    file: &Path,
    dictionary: &Path,
    config: &DecodeConfig,
    steps: bool,
) -> Result<()> {
    let text = read_text(file)?;
    let lexicon = Lexicon::from_file(dictionary);

    let result = decode_text(&text, &lexicon, config)
        .with_context(|| format!("Cannot decode {}", file.display()))?;
    print_decode_result(&result, steps);
    Ok(())
}

fn run_encode_command(file: &Path, alphabet: Option<&str>, random: bool) -> Result<()> {
    let text = read_text(file)?;

    let key = match alphabet {
        Some(alphabet) if !random => Alphabet::new(alphabet)?,
        _ => Alphabet::random(&mut rand::rng()),
    };

    let result = encode_text(&text, key)
        .with_context(|| format!("Cannot encode {}", file.display()))?;
    print_encode_result(&result);
    Ok(())
}

fn run_bench_command(dictionary: &Path, repeats: usize) -> Result<()> {
    println!(
        "Benchmarking {} ({repeats} loads)...",
        dictionary.display()
    );

    let result = run_bench(dictionary, &BenchConfig::new(repeats))
        .with_context(|| format!("Failed to benchmark {}", dictionary.display()))?;
    print_bench_result(&result);
    Ok(())
}
