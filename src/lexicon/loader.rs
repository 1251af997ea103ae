//! Dictionary loading
//!
//! Dictionaries are newline-delimited word lists. Surrounding whitespace is trimmed
//! and blank lines are skipped.

use super::Lexicon;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

impl Lexicon {
    /// Build a lexicon from a dictionary file
    ///
    /// A missing or unreadable file yields an empty lexicon and logs a warning.
    ///
    /// # Examples
    /// ```no_run
    /// use lexicrypt::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_file("mots/dictionnaire_FR_sans_accents.txt");
    /// println!("Loaded {} words", lexicon.size());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let start = Instant::now();

        let lexicon = match File::open(path) {
            Ok(file) => match Self::from_reader(BufReader::new(file)) {
                Ok(lexicon) => lexicon,
                Err(e) => {
                    warn!(
                        "Failed to read dictionary {}: {e}, using an empty lexicon",
                        path.display()
                    );
                    return Self::new();
                }
            },
            Err(e) => {
                warn!(
                    "Cannot open dictionary {}: {e}, using an empty lexicon",
                    path.display()
                );
                return Self::new();
            }
        };

        info!(
            "Loaded {} words ({} nodes) from {} in {:.3}s",
            lexicon.size(),
            lexicon.node_count(),
            path.display(),
            start.elapsed().as_secs_f64()
        );
        lexicon
    }

    /// Build a lexicon from any buffered reader
    ///
    /// Lines are decoded leniently: bytes that are not valid UTF-8 become
    /// replacement characters, which insertion then drops like any other
    /// character outside the symbol set. Blank lines never store the empty word.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the reader fails.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::lexicon::Lexicon;
    ///
    /// let text = "pomme\n  terre \n\nelle\n";
    /// let lexicon = Lexicon::from_reader(text.as_bytes()).unwrap();
    /// assert_eq!(lexicon.words(""), vec!["elle", "pomme", "terre"]);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut lexicon = Self::new();

        for line in trimmed_lines(reader) {
            lexicon.insert_word(&line?);
        }

        Ok(lexicon)
    }
}

/// Split a reader into trimmed, non-blank lines, decoding each one lossily
fn trimmed_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').filter_map(|line| match line {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            let word = text.trim();
            (!word.is_empty()).then(|| Ok(word.to_string()))
        }
        Err(e) => Some(Err(e)),
    })
}

/// Load the raw word list of a dictionary file
///
/// Returns trimmed, non-blank lines in file order, without any character filtering.
/// Invalid UTF-8 is decoded lossily, as in [`Lexicon::from_reader`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    trimmed_lines(BufReader::new(file)).collect()
}
