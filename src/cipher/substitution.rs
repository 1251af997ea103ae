//! Monoalphabetic substitution
//!
//! Applying an alphabet replaces each ASCII letter by the alphabet entry at the
//! letter's offset in `A`-`Z`. Encoding and decoding are the same operation with
//! mutually inverse alphabets.

use crate::core::{Alphabet, InvalidInput};

/// Apply a substitution alphabet to a text
///
/// - ASCII letters (either case) become `alphabet[offset]`
/// - Spaces and newlines are kept
/// - Every other character is dropped
///
/// # Errors
/// Returns `InvalidInput::EmptyText` if `text` is empty.
///
/// # Examples
/// ```
/// use lexicrypt::cipher::apply_substitution;
/// use lexicrypt::core::Alphabet;
///
/// let key = Alphabet::new("YESUMZRWFNVHOBJTGPCDLAIXQK").unwrap();
/// let encoded = apply_substitution("DEMANDE RENFORTS IMMEDIATEMENT", &key).unwrap();
/// assert_eq!(encoded, "UMOYBUM PMBZJPDC FOOMUFYDMOMBD");
///
/// let decoding = Alphabet::new("VNSTBIQLWOZUEJMRYGCPDKHXAF").unwrap();
/// let decoded = apply_substitution(&encoded, &decoding).unwrap();
/// assert_eq!(decoded, "DEMANDE RENFORTS IMMEDIATEMENT");
/// ```
pub fn apply_substitution(text: &str, alphabet: &Alphabet) -> Result<String, InvalidInput> {
    if text.is_empty() {
        return Err(InvalidInput::EmptyText);
    }

    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            let offset = usize::from(ch.to_ascii_uppercase() as u8 - b'A');
            result.push(char::from(alphabet.letter_at(offset)));
        } else if ch == ' ' || ch == '\n' {
            result.push(ch);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "YESUMZRWFNVHOBJTGPCDLAIXQK";
    const DECODING: &str = "VNSTBIQLWOZUEJMRYGCPDKHXAF";

    #[test]
    fn encodes_known_message() {
        let key = Alphabet::new(KEY).unwrap();
        let encoded = apply_substitution("DEMANDE RENFORTS IMMEDIATEMENT", &key).unwrap();
        assert_eq!(encoded, "UMOYBUM PMBZJPDC FOOMUFYDMOMBD");
    }

    #[test]
    fn inverse_alphabet_restores_text() {
        let key = Alphabet::new(KEY).unwrap();
        let decoding = Alphabet::new(DECODING).unwrap();
        let text = "LE CHIEN\nDORT SOUS LA TABLE";

        let encoded = apply_substitution(text, &key).unwrap();
        assert_ne!(encoded, text);
        assert_eq!(apply_substitution(&encoded, &decoding).unwrap(), text);
    }

    #[test]
    fn identity_keeps_uppercase_text() {
        let text = "HELLO WORLD";
        assert_eq!(apply_substitution(text, &Alphabet::IDENTITY).unwrap(), text);
    }

    #[test]
    fn lowercase_input_uses_alphabet_case() {
        assert_eq!(
            apply_substitution("hello", &Alphabet::IDENTITY).unwrap(),
            "HELLO"
        );
    }

    #[test]
    fn drops_punctuation_keeps_spaces_and_newlines() {
        let result = apply_substitution("l'ami, tire-bouchon!\n\tfin.", &Alphabet::IDENTITY).unwrap();
        assert_eq!(result, "LAMI TIREBOUCHON\nFIN");
    }

    #[test]
    fn drops_non_ascii_letters() {
        let result = apply_substitution("été", &Alphabet::IDENTITY).unwrap();
        assert_eq!(result, "T");
    }

    #[test]
    fn text_without_letters_can_become_empty() {
        assert_eq!(apply_substitution("123", &Alphabet::IDENTITY).unwrap(), "");
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            apply_substitution("", &Alphabet::IDENTITY),
            Err(InvalidInput::EmptyText)
        ));
    }
}
