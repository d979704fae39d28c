//! tenis-polar: the schoolyard letter-substitution cipher
//!
//! Takes a pair of keys (words of the same size with no repeating
//! letter anywhere, like "tenis" and "polar") and swaps the letters of
//! a message around based on the pairing between the two keys.
//! Uppercase maps to uppercase, everything outside the keys passes
//! through untouched, and applying the cipher twice gives the original
//! text back.
//!
//! Not real cryptography, of course. This is the paper-note cipher from
//! Pedro Bandeira's "The Karas" books, here for fun.
//!
//! ## How it works
//!
//! 1. **Validate**: keys must be equal-length with globally unique letters
//! 2. **Pair**: letter i of one key swaps with letter i of the other
//! 3. **Encrypt**: walk the message, swapping paired letters in place
//!
//! ```
//! use tenis_polar::Cipher;
//!
//! let cipher = Cipher::new("tenis", "polar");
//! assert!(cipher.status().is_valid());
//! assert_eq!(cipher.encrypt("Tenis Polar!").unwrap(), "Polar Tenis!");
//! ```

pub mod cipher;
pub mod keygen;

pub use cipher::{Cipher, InvalidKeyError, InvalidKeyReason, KeyStatus};
pub use keygen::{generate, KeygenError, MAX_KEY_LEN};
