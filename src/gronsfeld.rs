//! Gronsfeld polyalphabetic substitution over the 32-letter alphabet.
//!
//! The key is a word: each of its letters becomes a numeric shift (the
//! letter's alphabet index), and the shift sequence repeats cyclically over
//! the text. Encryption adds the shift mod 32, decryption subtracts it.
//!
//! Spaces and letters outside the alphabet pass input validation but carry
//! no index, so they are stripped from the output: the ciphertext can be
//! shorter than the input, and a round trip returns the upper-cased text
//! with those characters removed.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::CipherError;
use crate::Cipher;

/// Gronsfeld substitution cipher keyed by a letter word.
///
/// The numeric key is derived once at construction and is immutable for the
/// lifetime of the instance. `encrypt` and `decrypt` are pure functions of
/// the instance and their input; an instance can be shared freely across
/// threads.
///
/// # Examples
///
/// ```
/// use rucrypt::GronsfeldCipher;
///
/// let cipher = GronsfeldCipher::new("ДОЖДИ").unwrap();
/// let ciphertext = cipher.encrypt("ТИМПЛБДВА").unwrap();
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ТИМПЛБДВА");
/// ```
///
/// ```
/// use rucrypt::GronsfeldCipher;
///
/// assert!(GronsfeldCipher::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GronsfeldCipher {
    key: Vec<usize>,
}

impl GronsfeldCipher {
    /// Creates a cipher from a letter key.
    ///
    /// The key is upper-cased and every letter is mapped to its alphabet
    /// index. Alphabetic characters outside the 32-letter alphabet (Latin
    /// letters, Ё) pass the alphabetic check but have no index and are
    /// dropped by the mapping.
    ///
    /// # Parameters
    /// - `key_text`: The key word. Must be non-empty, letters only, and
    ///   contain at least one letter of the cipher alphabet.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKey`] if `key_text` is empty.
    /// - [`CipherError::InvalidKeyCharacter`] if any character is not
    ///   alphabetic.
    /// - [`CipherError::KeyHasNoValidLetters`] if no character maps into the
    ///   alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucrypt::{CipherError, GronsfeldCipher};
    ///
    /// assert!(GronsfeldCipher::new("ключ").is_ok());
    /// assert_eq!(
    ///     GronsfeldCipher::new("KEY123").unwrap_err(),
    ///     CipherError::InvalidKeyCharacter,
    /// );
    /// ```
    pub fn new(key_text: &str) -> Result<Self, CipherError> {
        if key_text.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        if key_text.chars().any(|c| !c.is_alphabetic()) {
            return Err(CipherError::InvalidKeyCharacter);
        }
        let key = alphabet::to_indices(&alphabet::uppercase(key_text));
        if key.is_empty() {
            return Err(CipherError::KeyHasNoValidLetters);
        }
        Ok(GronsfeldCipher { key })
    }

    /// Encrypts `text`.
    ///
    /// The text is upper-cased and mapped to alphabet indices (dropping
    /// spaces and unmapped letters); each index is shifted by the cyclically
    /// repeated key, mod 32.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if `text` is empty.
    /// - [`CipherError::InvalidTextCharacter`] if any character is neither
    ///   alphabetic nor a space.
    /// - [`CipherError::TextHasNoValidLetters`] if nothing maps into the
    ///   alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucrypt::GronsfeldCipher;
    ///
    /// let cipher = GronsfeldCipher::new("ДОЖДИ").unwrap();
    /// assert_eq!(cipher.encrypt("ТИМПЛБДВА").unwrap(), "ЦЦТУУЕТИД");
    /// ```
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let mut work = Self::prepare(text)?;
        for (i, index) in work.iter_mut().enumerate() {
            *index = (*index + self.key[i % self.key.len()]) % ALPHABET_LEN;
        }
        Self::collect(&work)
    }

    /// Decrypts `cipher_text`.
    ///
    /// Mirrors [`encrypt`](Self::encrypt) with the inverse shift
    /// `(index + 32 - key) % 32` at each position, and the same validation.
    ///
    /// # Errors
    /// Same kinds as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        let mut work = Self::prepare(cipher_text)?;
        for (i, index) in work.iter_mut().enumerate() {
            *index =
                (*index + ALPHABET_LEN - self.key[i % self.key.len()]) % ALPHABET_LEN;
        }
        Self::collect(&work)
    }

    /// Validates raw input and maps it to a working index sequence.
    ///
    /// Validation runs on the raw characters first (letters and spaces
    /// only), then upper-casing and the narrower alphabet mapping drop
    /// whatever has no index.
    fn prepare(text: &str) -> Result<Vec<usize>, CipherError> {
        if text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        if text.chars().any(|c| !c.is_alphabetic() && c != ' ') {
            return Err(CipherError::InvalidTextCharacter);
        }
        let work = alphabet::to_indices(&alphabet::uppercase(text));
        if work.is_empty() {
            return Err(CipherError::TextHasNoValidLetters);
        }
        Ok(work)
    }

    /// Maps a shifted index sequence back to letters.
    fn collect(indices: &[usize]) -> Result<String, CipherError> {
        indices.iter().map(|&i| alphabet::letter_at(i)).collect()
    }
}

impl Cipher for GronsfeldCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        GronsfeldCipher::encrypt(self, text)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        GronsfeldCipher::decrypt(self, cipher_text)
    }
}
