//! Substitution alphabets
//!
//! An alphabet holds 26 uppercase ASCII bytes. Position `i` is the letter emitted
//! for the `i`-th letter of [`PLAIN_LETTERS`], so the same type serves as an
//! encoding key or as a decoding alphabet depending on which side it is applied to.

use super::InvalidInput;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Fixed letter ordering used to index every alphabet
pub const PLAIN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in an alphabet
pub const ALPHABET_LEN: usize = 26;

/// A 26-letter substitution alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet([u8; ALPHABET_LEN]);

impl Alphabet {
    /// The alphabet that maps every letter to itself
    pub const IDENTITY: Self = Self(*b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    /// Parse an alphabet, normalizing it to uppercase
    ///
    /// # Errors
    /// Returns `InvalidInput` if:
    /// - The text is not exactly 26 characters long
    /// - The text contains non-ASCII characters
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("yesumzrwfnvhobjtgpcdlaixqk").unwrap();
    /// assert_eq!(alphabet.as_str(), "YESUMZRWFNVHOBJTGPCDLAIXQK");
    ///
    /// assert!(Alphabet::new("ABC").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InvalidInput> {
        let count = text.chars().count();
        if count != ALPHABET_LEN {
            return Err(InvalidInput::AlphabetLength(count));
        }

        if !text.is_ascii() {
            return Err(InvalidInput::NonAsciiAlphabet);
        }

        let mut letters = [0u8; ALPHABET_LEN];
        letters.copy_from_slice(text.to_ascii_uppercase().as_bytes());
        Ok(Self(letters))
    }

    /// Generate a random permutation of the 26 letters
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = Self::IDENTITY.0;
        letters.shuffle(rng);
        Self(letters)
    }

    /// Get the alphabet as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Constructors only ever store ASCII
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the alphabet as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }

    /// Get the letter substituted for the letter at `offset` in [`PLAIN_LETTERS`]
    ///
    /// # Panics
    /// Panics if offset >= 26
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, offset: usize) -> u8 {
        self.0[offset]
    }

    /// Find the slot currently holding `letter`
    #[inline]
    #[must_use]
    pub fn position_of(&self, letter: u8) -> Option<usize> {
        self.0.iter().position(|&l| l == letter)
    }

    /// Check that the alphabet holds each of the 26 letters exactly once
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &letter in &self.0 {
            if !letter.is_ascii_uppercase() {
                return false;
            }
            let slot = &mut seen[usize::from(letter - b'A')];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Compute the alphabet that undoes this one
    ///
    /// Returns `None` if the alphabet is not a permutation.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::core::Alphabet;
    ///
    /// let key = Alphabet::new("YESUMZRWFNVHOBJTGPCDLAIXQK").unwrap();
    /// let inverse = key.inverse().unwrap();
    /// assert_eq!(inverse.as_str(), "VNSTBIQLWOZUEJMRYGCPDKHXAF");
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_permutation() {
            return None;
        }

        let mut letters = [0u8; ALPHABET_LEN];
        for (offset, &letter) in self.0.iter().enumerate() {
            letters[usize::from(letter - b'A')] = Self::IDENTITY.0[offset];
        }
        Some(Self(letters))
    }

    /// Merge the letter correspondences implied by a cipher/plain word pair
    ///
    /// For each position the slot of the cipher letter is made to hold the plain
    /// letter. If the plain letter already sits in another slot the two slots are
    /// swapped, so a permutation stays a permutation. If it is absent the slot is
    /// overwritten. Positions where either side is not an ASCII letter are skipped.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::core::Alphabet;
    ///
    /// let merged = Alphabet::IDENTITY.merge("TJOOM", "pomme");
    /// assert_eq!(merged.as_str(), "ABCDJFGHIOKLENMTQRSPUVWXYZ");
    /// assert!(merged.is_permutation());
    /// ```
    #[must_use]
    pub fn merge(&self, cipher_word: &str, plain_word: &str) -> Self {
        let mut letters = self.0;

        for (cipher, plain) in cipher_word.chars().zip(plain_word.chars()) {
            if !cipher.is_ascii_alphabetic() || !plain.is_ascii_alphabetic() {
                continue;
            }

            let slot = usize::from(cipher.to_ascii_uppercase() as u8 - b'A');
            let plain = plain.to_ascii_uppercase() as u8;

            match letters.iter().position(|&l| l == plain) {
                Some(current) if current == slot => {}
                Some(current) => letters.swap(slot, current),
                None => letters[slot] = plain,
            }
        }

        Self(letters)
    }

    /// Mark the slots where two alphabets disagree
    ///
    /// Returns a 26-character string with `' '` for equal slots and `'x'` for differing ones.
    ///
    /// # Examples
    /// ```
    /// use lexicrypt::core::Alphabet;
    ///
    /// let a = Alphabet::IDENTITY;
    /// let b = Alphabet::new("BACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    /// assert_eq!(a.differences(&b), format!("xx{}", " ".repeat(24)));
    /// ```
    #[must_use]
    pub fn differences(&self, other: &Self) -> String {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| if a == b { ' ' } else { 'x' })
            .collect()
    }

    /// Count the slots where two alphabets disagree
    #[must_use]
    pub fn count_differences(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Alphabet {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
