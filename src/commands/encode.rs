//! Text encoding command
//!
//! Encrypts a plaintext with a key alphabet and reports the matching decoding alphabet.

use crate::cipher::apply_substitution;
use crate::core::{Alphabet, InvalidInput};

/// Result of encoding a text
pub struct EncodeResult {
    pub key: Alphabet,
    /// `None` when the key is not a permutation and cannot be undone
    pub decoding: Option<Alphabet>,
    pub ciphertext: String,
}

/// Encrypt `text` with `key`
///
/// # Errors
///
/// Returns `InvalidInput::EmptyText` if `text` is empty.
pub fn encode_text(text: &str, key: Alphabet) -> Result<EncodeResult, InvalidInput> {
    let ciphertext = apply_substitution(text, &key)?;

    Ok(EncodeResult {
        key,
        decoding: key.inverse(),
        ciphertext,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn encode_with_known_key() {
        let key = Alphabet::new("YESUMZRWFNVHOBJTGPCDLAIXQK").unwrap();
        let result = encode_text("DEMANDE RENFORTS IMMEDIATEMENT", key).unwrap();

        assert_eq!(result.ciphertext, "UMOYBUM PMBZJPDC FOOMUFYDMOMBD");
        assert_eq!(
            result.decoding.map(|alphabet| alphabet.to_string()),
            Some("VNSTBIQLWOZUEJMRYGCPDKHXAF".to_string())
        );
    }

    #[test]
    fn random_key_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        let key = Alphabet::random(&mut rng);
        let text = "LE CHAT DORT\nSUR LE CANAPE";

        let result = encode_text(text, key).unwrap();
        let decoding = result.decoding.unwrap();
        assert_eq!(apply_substitution(&result.ciphertext, &decoding).unwrap(), text);
    }

    #[test]
    fn non_permutation_key_has_no_decoding() {
        let key = Alphabet::new("AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        let result = encode_text("BAC", key).unwrap();

        assert_eq!(result.ciphertext, "AAC");
        assert!(result.decoding.is_none());
    }

    #[test]
    fn encode_rejects_empty_text() {
        assert!(matches!(
            encode_text("", Alphabet::IDENTITY),
            Err(InvalidInput::EmptyText)
        ));
    }
}
