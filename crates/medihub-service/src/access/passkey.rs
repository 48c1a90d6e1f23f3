//! Passkey generation and normalization.

use rand::Rng;

/// The fixed passkey alphabet: uppercase letters and digits minus the
/// visually ambiguous `0`, `O`, `1` and `I`.
pub const PASSKEY_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Passkeys are always exactly this long.
pub const PASSKEY_LENGTH: usize = 5;

/// Draw a fresh passkey: five independent characters from the alphabet.
///
/// No uniqueness check against historical passkeys is needed — matching
/// is always scoped to (patient, passkey, pending), so a collision with
/// a consumed or expired code is benign.
pub fn generate() -> String {
    let mut rng = rand::rng();
    (0..PASSKEY_LENGTH)
        .map(|_| PASSKEY_ALPHABET[rng.random_range(0..PASSKEY_ALPHABET.len())] as char)
        .collect()
}

/// Normalize a submitted code for matching: entry is case-insensitive.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_passkey_shape() {
        for _ in 0..100 {
            let key = generate();
            assert_eq!(key.len(), PASSKEY_LENGTH);
            assert!(
                key.bytes().all(|b| PASSKEY_ALPHABET.contains(&b)),
                "passkey '{key}' contains a character outside the alphabet"
            );
        }
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_characters() {
        for ambiguous in [b'0', b'O', b'1', b'I'] {
            assert!(!PASSKEY_ALPHABET.contains(&ambiguous));
        }
        assert_eq!(PASSKEY_ALPHABET.len(), 32);
    }

    #[test]
    fn test_normalize_uppercases_and_trims() {
        assert_eq!(normalize("ab3de"), "AB3DE");
        assert_eq!(normalize(" 7k3m9 "), "7K3M9");
    }
}
