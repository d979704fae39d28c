//! Keygen module: random valid key pairs
//!
//! Draws `2 * len` distinct letters from the ASCII alphabet and splits
//! them into two keys. Pairs built this way always validate, since no
//! letter can appear twice anywhere.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Letters a generated key pair draws from
const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Longest possible key: two keys must fit in one 26-letter alphabet
pub const MAX_KEY_LEN: usize = ALPHABET.len() / 2;

/// Errors produced by key generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeygenError {
    /// Requested length is zero or leaves too few letters for two keys
    #[error("key length must be between 1 and {MAX_KEY_LEN}")]
    BadLength,
}

/// Generate a random valid key pair of the given length
pub fn generate(len: usize) -> Result<(String, String), KeygenError> {
    generate_with_rng(len, &mut rand::thread_rng())
}

/// Generate with a specific RNG (for testing)
pub fn generate_with_rng<R: Rng>(len: usize, rng: &mut R) -> Result<(String, String), KeygenError> {
    if len == 0 || len > MAX_KEY_LEN {
        return Err(KeygenError::BadLength);
    }

    let mut pool: Vec<char> = ALPHABET.to_vec();
    pool.shuffle(rng);

    let key_a: String = pool[..len].iter().collect();
    let key_b: String = pool[len..2 * len].iter().collect();

    Ok((key_a, key_b))
}
