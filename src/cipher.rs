//! Cipher module: key-pair validation and letter substitution
//!
//! A key pair is two equal-length words sharing no letter, within or
//! between them ("tenis" / "polar" is the canonical pair). Each letter
//! of one key trades places with the letter at the same position in the
//! other key, in both directions and in both cases. Everything else
//! passes through unchanged.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Why a key pair failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidKeyReason {
    /// The two keys have different character counts
    SizeMismatch,
    /// A letter repeats within one key or between the two
    DuplicateLetters,
}

impl fmt::Display for InvalidKeyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidKeyReason::SizeMismatch => write!(f, "Keys have different sizes."),
            InvalidKeyReason::DuplicateLetters => {
                write!(f, "There are repeating letters somewhere.")
            }
        }
    }
}

/// Validation outcome, computed once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyStatus {
    /// The pair can encrypt
    Valid,
    /// The pair cannot encrypt; the reason says why
    Invalid(InvalidKeyReason),
}

impl KeyStatus {
    /// True when the pair passed validation
    pub fn is_valid(&self) -> bool {
        matches!(self, KeyStatus::Valid)
    }
}

/// Error returned when `encrypt` is called on an invalid pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid key pair: {reason}")]
pub struct InvalidKeyError {
    /// The reason stored at construction
    pub reason: InvalidKeyReason,
}

/// A Tenis-Polar cipher built from one key pair
///
/// Construction never fails: an unusable pair is reported through
/// [`Cipher::status`], and only [`Cipher::encrypt`] turns it into an
/// error. The keys are lowercased up front and immutable afterwards,
/// so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Cipher {
    /// First key, lowercased
    key_a: Vec<char>,
    /// Second key, lowercased
    key_b: Vec<char>,
    /// Validation result for this pair
    status: KeyStatus,
    /// Bidirectional letter pairing, both cases
    table: HashMap<char, char>,
}

impl Cipher {
    /// Build a cipher from two keys
    ///
    /// Both keys are lowercased before anything else, so `"Tenis"` and
    /// `"tenis"` produce identical ciphers. Validation runs here and
    /// the result is kept for [`Cipher::status`].
    pub fn new(key_a: &str, key_b: &str) -> Self {
        let key_a: Vec<char> = key_a.to_lowercase().chars().collect();
        let key_b: Vec<char> = key_b.to_lowercase().chars().collect();

        let status = validate(&key_a, &key_b);
        let table = build_table(&key_a, &key_b);

        Self {
            key_a,
            key_b,
            status,
            table,
        }
    }

    /// Validation status of this pair
    ///
    /// Useful to check whether two words can work as keys at all,
    /// without encrypting anything.
    pub fn status(&self) -> &KeyStatus {
        &self.status
    }

    /// The first key, as lowercased at construction
    pub fn key_a(&self) -> String {
        self.key_a.iter().collect()
    }

    /// The second key, as lowercased at construction
    pub fn key_b(&self) -> String {
        self.key_b.iter().collect()
    }

    /// Encrypt a message, swapping paired letters and keeping the rest
    ///
    /// One output character per input character, in order. Fails with
    /// the stored validation reason when the pair is invalid. Because
    /// the substitution is an involution, encrypting twice returns the
    /// original message.
    pub fn encrypt(&self, message: &str) -> Result<String, InvalidKeyError> {
        match self.status {
            KeyStatus::Valid => Ok(message.chars().map(|c| self.switch_letter(c)).collect()),
            KeyStatus::Invalid(reason) => Err(InvalidKeyError { reason }),
        }
    }

    /// Swap a single character through the pairing table
    ///
    /// Lowercase key letters map to their lowercase partner, uppercase
    /// forms to the uppercase partner. Characters outside both keys
    /// (spaces, punctuation, digits, unrelated letters) come back
    /// unchanged. Pure lookup with no side effects; works even when the
    /// pair is invalid, since the table only depends on the keys.
    pub fn switch_letter(&self, c: char) -> char {
        self.table.get(&c).copied().unwrap_or(c)
    }
}

/// Validate a (lowercased) key pair
///
/// Size first: both keys must have the same character count. Then
/// uniqueness: the combined character sequence of both keys must have
/// as many distinct characters as total characters, which catches
/// repeats within one key and shared letters between the two alike.
fn validate(key_a: &[char], key_b: &[char]) -> KeyStatus {
    if key_a.len() != key_b.len() {
        return KeyStatus::Invalid(InvalidKeyReason::SizeMismatch);
    }

    let total = key_a.len() + key_b.len();
    let distinct: HashSet<char> = key_a.iter().chain(key_b.iter()).copied().collect();

    if distinct.len() < total {
        return KeyStatus::Invalid(InvalidKeyReason::DuplicateLetters);
    }

    KeyStatus::Valid
}

/// Build the substitution table for a (lowercased) key pair
///
/// Walks positions in order and inserts four entries per position:
/// a→b, b→a, and the uppercase forms of both. First insertion wins, so
/// lookups behave exactly like a positional scan even for duplicate
/// keys that never validate. Letters whose uppercase form expands to
/// more than one character get no uppercase entry.
fn build_table(key_a: &[char], key_b: &[char]) -> HashMap<char, char> {
    let mut table = HashMap::new();

    for (&a, &b) in key_a.iter().zip(key_b.iter()) {
        table.entry(a).or_insert(b);
        table.entry(b).or_insert(a);

        if let (Some(ua), Some(ub)) = (uppercase_single(a), uppercase_single(b)) {
            table.entry(ua).or_insert(ub);
            table.entry(ub).or_insert(ua);
        }
    }

    table
}

/// Uppercase a character when the result is a single character
fn uppercase_single(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference lookup: scan key positions the way the table is built,
    /// four case/direction checks per position
    fn switch_letter_scan(cipher: &Cipher, target: char) -> char {
        let key_a: Vec<char> = cipher.key_a().chars().collect();
        let key_b: Vec<char> = cipher.key_b().chars().collect();

        for (&a, &b) in key_a.iter().zip(key_b.iter()) {
            if target == a {
                return b;
            }
            if target == b {
                return a;
            }
            if let (Some(ua), Some(ub)) = (uppercase_single(a), uppercase_single(b)) {
                if target == ua {
                    return ub;
                }
                if target == ub {
                    return ua;
                }
            }
        }
        target
    }

    #[test]
    fn test_canonical_pair_is_valid() {
        let cipher = Cipher::new("tenis", "polar");
        assert!(cipher.status().is_valid());
    }

    #[test]
    fn test_encrypt_canonical_pair() {
        let cipher = Cipher::new("tenis", "polar");
        assert_eq!(cipher.encrypt("tenis").unwrap(), "polar");
        assert_eq!(cipher.encrypt("POLAR").unwrap(), "TENIS");
        assert_eq!(cipher.encrypt("Tenis Polar!").unwrap(), "Polar Tenis!");
    }

    #[test]
    fn test_mixed_case_keys_are_lowercased() {
        let upper = Cipher::new("Tenis", "POLAR");
        let lower = Cipher::new("tenis", "polar");

        assert!(upper.status().is_valid());
        assert_eq!(upper.key_a(), "tenis");
        assert_eq!(
            upper.encrypt("Tenis Polar!").unwrap(),
            lower.encrypt("Tenis Polar!").unwrap()
        );
    }

    #[test]
    fn test_size_mismatch() {
        let cipher = Cipher::new("ab", "abc");
        assert_eq!(
            *cipher.status(),
            KeyStatus::Invalid(InvalidKeyReason::SizeMismatch)
        );

        let err = cipher.encrypt("hello").unwrap_err();
        assert_eq!(err.reason, InvalidKeyReason::SizeMismatch);
    }

    #[test]
    fn test_duplicate_within_one_key() {
        let cipher = Cipher::new("aab", "xyz");
        assert_eq!(
            *cipher.status(),
            KeyStatus::Invalid(InvalidKeyReason::DuplicateLetters)
        );
    }

    #[test]
    fn test_duplicate_across_keys() {
        let cipher = Cipher::new("abc", "cde");
        assert_eq!(
            *cipher.status(),
            KeyStatus::Invalid(InvalidKeyReason::DuplicateLetters)
        );
        assert!(cipher.encrypt("anything").is_err());
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        let cipher = Cipher::new("tenis", "polar");
        assert_eq!(cipher.encrypt("123 ?! xyz").unwrap(), "123 ?! xyz");
        assert_eq!(cipher.switch_letter('7'), '7');
        assert_eq!(cipher.switch_letter(' '), ' ');
        assert_eq!(cipher.switch_letter('z'), 'z');
    }

    #[test]
    fn test_switch_letter_is_involution() {
        let cipher = Cipher::new("tenis", "polar");

        for c in "tenispolarTENISPOLAR".chars() {
            let swapped = cipher.switch_letter(c);
            assert_ne!(swapped, c);
            assert_eq!(cipher.switch_letter(swapped), c);
        }
    }

    #[test]
    fn test_encrypt_round_trip() {
        let cipher = Cipher::new("tenis", "polar");
        let message = "A quick Note passed in class, 3rd period!";

        let encoded = cipher.encrypt(message).unwrap();
        assert_eq!(cipher.encrypt(&encoded).unwrap(), message);
    }

    #[test]
    fn test_encrypt_preserves_length() {
        let cipher = Cipher::new("tenis", "polar");

        for message in ["", "a", "Tenis Polar!", "no key letters here? nope."] {
            let encoded = cipher.encrypt(message).unwrap();
            assert_eq!(encoded.chars().count(), message.chars().count());
        }
    }

    #[test]
    fn test_table_matches_naive_scan() {
        // Valid, invalid-duplicate, and cross-duplicate pairs: the
        // prebuilt table must agree with the positional scan everywhere
        let pairs = [("tenis", "polar"), ("aab", "xyz"), ("abc", "cde")];

        for (key_a, key_b) in pairs {
            let cipher = Cipher::new(key_a, key_b);
            for c in (b' '..=b'~').map(|b| b as char) {
                assert_eq!(
                    cipher.switch_letter(c),
                    switch_letter_scan(&cipher, c),
                    "mismatch on {:?} for keys {:?}/{:?}",
                    c,
                    key_a,
                    key_b
                );
            }
        }
    }

    #[test]
    fn test_uppercase_mapping_from_lowercase_keys() {
        // Keys are stored lowercase only; uppercase input still maps
        // through the case-transformed pairing
        let cipher = Cipher::new("tenis", "polar");
        assert_eq!(cipher.switch_letter('T'), 'P');
        assert_eq!(cipher.switch_letter('P'), 'T');
    }

    #[test]
    fn test_diagnostic_strings() {
        assert_eq!(
            InvalidKeyReason::SizeMismatch.to_string(),
            "Keys have different sizes."
        );
        assert_eq!(
            InvalidKeyReason::DuplicateLetters.to_string(),
            "There are repeating letters somewhere."
        );
    }

    #[test]
    fn test_invalid_key_error_display() {
        let err = InvalidKeyError {
            reason: InvalidKeyReason::SizeMismatch,
        };
        assert_eq!(
            err.to_string(),
            "invalid key pair: Keys have different sizes."
        );
    }

    #[test]
    fn test_non_ascii_keys() {
        let cipher = Cipher::new("éçã", "xyz");
        assert!(cipher.status().is_valid());
        assert_eq!(cipher.encrypt("éçã").unwrap(), "xyz");
        assert_eq!(cipher.encrypt("ÉÇÃ").unwrap(), "XYZ");
        assert_eq!(cipher.encrypt("XYZ").unwrap(), "ÉÇÃ");
    }

    #[test]
    fn test_char_count_not_byte_count() {
        // "éé" is four bytes but two chars; sizes must compare in chars
        let cipher = Cipher::new("éã", "ab");
        assert!(cipher.status().is_valid());
    }
}
