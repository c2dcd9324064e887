//! Classical text cipher engines for the 32-letter Russian alphabet.
//!
//! Two independent engines, historically significant and cryptographically
//! weak — study and demonstration material, not protection:
//!
//! - [`GronsfeldCipher`] — polyalphabetic substitution. A letter key becomes
//!   a sequence of numeric shifts (alphabet indices) that repeats cyclically
//!   over the text; encryption adds the shift mod 32.
//! - [`RouteCipher`] — columnar route transposition. The text is written
//!   into a rectangular grid row by row and read out column by column from
//!   the right; the column count is the key.
//!
//! # Architecture
//!
//! ```text
//! alphabet        (32-letter table — letter ↔ index bijection)
//!     ↑ indexes
//! GronsfeldCipher (letter key → cyclic mod-32 shifts over mapped text)
//! RouteCipher     (column count → grid write/read traversals, no mapping)
//! ```
//!
//! The engines share no cipher logic. Both validate their input, fail with a
//! distinct [`CipherError`] kind on every violation, and are immutable after
//! construction: `encrypt`/`decrypt` take `&self`, build any working state
//! fresh per call, and can run concurrently without synchronization.
//!
//! # Examples
//!
//! Substitution — a round trip upper-cases the text and strips spaces:
//!
//! ```
//! use rucrypt::GronsfeldCipher;
//!
//! let cipher = GronsfeldCipher::new("ДОЖДИ").unwrap();
//! let ciphertext = cipher.encrypt("привет мир").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ПРИВЕТМИР");
//! ```
//!
//! Transposition — a round trip is the exact identity:
//!
//! ```
//! use rucrypt::RouteCipher;
//!
//! let cipher = RouteCipher::new(3).unwrap();
//! let ciphertext = cipher.encrypt("ПРИВЕТ МИР").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ПРИВЕТ МИР");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod gronsfeld;
mod route;

pub use error::CipherError;
pub use gronsfeld::GronsfeldCipher;
pub use route::RouteCipher;

/// The encrypt/decrypt capability both engines expose.
///
/// Useful for driving either engine through one code path, e.g. in symmetry
/// tests or a console front end.
///
/// # Examples
///
/// ```
/// use rucrypt::{Cipher, GronsfeldCipher, RouteCipher};
///
/// let ciphers: Vec<Box<dyn Cipher>> = vec![
///     Box::new(GronsfeldCipher::new("КЛЮЧ").unwrap()),
///     Box::new(RouteCipher::new(3).unwrap()),
/// ];
/// for cipher in &ciphers {
///     let ciphertext = cipher.encrypt("ШИФРОВАНИЕ").unwrap();
///     assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ШИФРОВАНИЕ");
/// }
/// ```
pub trait Cipher {
    /// Encrypts `text`, returning the ciphertext.
    ///
    /// # Errors
    /// Returns a [`CipherError`] describing the first validation failure.
    fn encrypt(&self, text: &str) -> Result<String, CipherError>;

    /// Decrypts `cipher_text`, returning the plaintext.
    ///
    /// # Errors
    /// Returns a [`CipherError`] describing the first validation failure.
    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError>;
}
