//! Columnar route transposition cipher.
//!
//! The text is written into a rectangular grid row by row, left to right,
//! and read back out column by column from the rightmost column to the
//! leftmost, top to bottom within each column. The column count is the key.
//!
//! Unlike the substitution engine this one performs no alphabet mapping and
//! no case folding: spaces are ordinary grid content, every character of the
//! input reappears in the output, and a round trip is the exact identity.

use crate::error::CipherError;
use crate::Cipher;

/// Maximum column count accepted as a key.
const MAX_COLUMNS: i32 = 1000;

/// Maximum number of grid rows derived from the input length.
const MAX_ROWS: usize = 10_000;

/// Route transposition cipher keyed by a column count.
///
/// The column count is fixed at construction and immutable thereafter. The
/// working grid is built fresh per call and discarded afterwards; `encrypt`
/// and `decrypt` are pure functions of the instance and their input.
///
/// # Examples
///
/// ```
/// use rucrypt::RouteCipher;
///
/// let cipher = RouteCipher::new(3).unwrap();
/// let ciphertext = cipher.encrypt("ПРИВЕТМИР").unwrap();
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ПРИВЕТМИР");
/// ```
///
/// ```
/// use rucrypt::RouteCipher;
///
/// assert!(RouteCipher::new(-5).is_err());
/// assert!(RouteCipher::new(1001).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCipher {
    num_columns: usize,
}

impl RouteCipher {
    /// Creates a cipher with the given column count.
    ///
    /// # Parameters
    /// - `num_columns`: Grid width, 1..=1000.
    ///
    /// # Errors
    /// - [`CipherError::InvalidKey`] if `num_columns <= 0`.
    /// - [`CipherError::KeyTooLarge`] if `num_columns > 1000`.
    pub fn new(num_columns: i32) -> Result<Self, CipherError> {
        if num_columns <= 0 {
            return Err(CipherError::InvalidKey);
        }
        if num_columns > MAX_COLUMNS {
            return Err(CipherError::KeyTooLarge);
        }
        Ok(RouteCipher {
            num_columns: num_columns as usize,
        })
    }

    /// Encrypts `text`.
    ///
    /// Writes the text into the grid row-major, then reads it out
    /// column-major from the last column to the first, top to bottom,
    /// skipping the blank cells of the final partial row. The output has
    /// exactly the input's length.
    ///
    /// # Errors
    /// - [`CipherError::EmptyText`] if `text` is empty.
    /// - [`CipherError::InvalidTextCharacter`] if any character is neither
    ///   alphabetic nor a space.
    /// - [`CipherError::KeyExceedsTextLength`] if the column count exceeds
    ///   the text length.
    /// - [`CipherError::TableTooLarge`] if the derived row count exceeds
    ///   10000.
    ///
    /// # Examples
    ///
    /// ```
    /// use rucrypt::RouteCipher;
    ///
    /// let cipher = RouteCipher::new(3).unwrap();
    /// assert_eq!(cipher.encrypt("ПРИВЕТМИР").unwrap(), "ИТРРЕИПВМ");
    /// ```
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let chars = self.validate(text)?;
        let num_rows = self.num_rows(chars.len())?;
        let num_columns = self.num_columns;

        // Write row-major; cells past the end of the text stay blank.
        let mut grid: Vec<Option<char>> = vec![None; num_rows * num_columns];
        for (cell, &ch) in grid.iter_mut().zip(chars.iter()) {
            *cell = Some(ch);
        }

        // Read columns right to left, top to bottom within each column.
        let mut result = String::with_capacity(text.len());
        for col in (0..num_columns).rev() {
            for row in 0..num_rows {
                if let Some(ch) = grid[row * num_columns + col] {
                    result.push(ch);
                }
            }
        }
        Ok(result)
    }

    /// Decrypts `cipher_text`.
    ///
    /// Writes the ciphertext into the grid in the order encryption read it
    /// out (columns right to left, top to bottom), then reads row-major.
    /// Cells of the final row that encryption never filled must be skipped
    /// during writing, not filled, or every later character would land one
    /// cell off.
    ///
    /// # Errors
    /// Same kinds as [`encrypt`](Self::encrypt), applied to `cipher_text`.
    pub fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        let chars = self.validate(cipher_text)?;
        let num_rows = self.num_rows(chars.len())?;
        let num_columns = self.num_columns;

        // Count of filled cells in the final, possibly partial, row.
        let mut last_row_len = chars.len() % num_columns;
        if last_row_len == 0 {
            last_row_len = num_columns;
        }

        let mut grid: Vec<Option<char>> = vec![None; num_rows * num_columns];
        let mut input = chars.iter();
        for col in (0..num_columns).rev() {
            for row in 0..num_rows {
                if row == num_rows - 1 && col >= last_row_len {
                    continue;
                }
                if let Some(&ch) = input.next() {
                    grid[row * num_columns + col] = Some(ch);
                }
            }
        }

        // Read row-major; the flat grid is already in that order.
        let mut result = String::with_capacity(cipher_text.len());
        for &ch in grid.iter().flatten() {
            result.push(ch);
        }
        Ok(result)
    }

    /// Validates the input and collects it into a character sequence.
    fn validate(&self, text: &str) -> Result<Vec<char>, CipherError> {
        if text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        if text.chars().any(|c| !c.is_alphabetic() && c != ' ') {
            return Err(CipherError::InvalidTextCharacter);
        }
        let chars: Vec<char> = text.chars().collect();
        if self.num_columns > chars.len() {
            return Err(CipherError::KeyExceedsTextLength);
        }
        Ok(chars)
    }

    /// Derives the grid height for an input of `len` characters.
    fn num_rows(&self, len: usize) -> Result<usize, CipherError> {
        let num_rows = len.div_ceil(self.num_columns);
        if num_rows > MAX_ROWS {
            return Err(CipherError::TableTooLarge);
        }
        Ok(num_rows)
    }
}

impl Cipher for RouteCipher {
    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        RouteCipher::encrypt(self, text)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        RouteCipher::decrypt(self, cipher_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive_key() {
        assert_eq!(RouteCipher::new(0), Err(CipherError::InvalidKey));
        assert_eq!(RouteCipher::new(-5), Err(CipherError::InvalidKey));
    }

    #[test]
    fn test_new_rejects_oversized_key() {
        assert_eq!(RouteCipher::new(1001), Err(CipherError::KeyTooLarge));
        assert!(RouteCipher::new(1000).is_ok());
    }

    #[test]
    fn test_encrypt_known_vector() {
        // Grid for key 3: [П Р И] [В Е Т] [М И Р]; read right column first.
        let cipher = RouteCipher::new(3).unwrap();
        assert_eq!(cipher.encrypt("ПРИВЕТМИР").unwrap(), "ИТРРЕИПВМ");
    }

    #[test]
    fn test_decrypt_known_vector() {
        let cipher = RouteCipher::new(3).unwrap();
        assert_eq!(cipher.decrypt("ИТРРЕИПВМ").unwrap(), "ПРИВЕТМИР");
    }

    #[test]
    fn test_roundtrip_with_partial_last_row() {
        // 10 characters over 3 columns leaves a single-cell final row.
        let cipher = RouteCipher::new(3).unwrap();
        let text = "ПРИВЕТ МИР";
        let ciphertext = cipher.encrypt(text).unwrap();
        assert_eq!(ciphertext.chars().count(), text.chars().count());
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), text);
    }

    #[test]
    fn test_spaces_survive_the_grid() {
        let cipher = RouteCipher::new(4).unwrap();
        let text = "А Б В Г Д";
        let ciphertext = cipher.encrypt(text).unwrap();
        assert_eq!(ciphertext.chars().count(), text.chars().count());
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), text);
    }

    #[test]
    fn test_case_is_preserved_untouched() {
        let cipher = RouteCipher::new(2).unwrap();
        let text = "ПрИвЕт";
        assert_eq!(cipher.decrypt(&cipher.encrypt(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn test_single_column_is_identity() {
        let cipher = RouteCipher::new(1).unwrap();
        assert_eq!(cipher.encrypt("ПРИВЕТ").unwrap(), "ПРИВЕТ");
        assert_eq!(cipher.decrypt("ПРИВЕТ").unwrap(), "ПРИВЕТ");
    }

    #[test]
    fn test_columns_equal_to_length_reverses() {
        // One row; reading columns right to left reverses the text.
        let cipher = RouteCipher::new(6).unwrap();
        assert_eq!(cipher.encrypt("ПРИВЕТ").unwrap(), "ТЕВИРП");
        assert_eq!(cipher.decrypt("ТЕВИРП").unwrap(), "ПРИВЕТ");
    }

    #[test]
    fn test_encrypt_rejects_empty_text() {
        let cipher = RouteCipher::new(3).unwrap();
        assert_eq!(cipher.encrypt(""), Err(CipherError::EmptyText));
        assert_eq!(cipher.decrypt(""), Err(CipherError::EmptyText));
    }

    #[test]
    fn test_encrypt_rejects_punctuation() {
        let cipher = RouteCipher::new(3).unwrap();
        assert_eq!(
            cipher.encrypt("ПРИВЕТ, МИР"),
            Err(CipherError::InvalidTextCharacter)
        );
    }

    #[test]
    fn test_encrypt_rejects_key_longer_than_text() {
        let cipher = RouteCipher::new(10).unwrap();
        assert_eq!(
            cipher.encrypt("ПРИВЕТ"),
            Err(CipherError::KeyExceedsTextLength)
        );
        assert_eq!(
            cipher.decrypt("ПРИВЕТ"),
            Err(CipherError::KeyExceedsTextLength)
        );
    }

    #[test]
    fn test_encrypt_rejects_oversized_table() {
        let cipher = RouteCipher::new(1).unwrap();
        let text = "А".repeat(10_001);
        assert_eq!(cipher.encrypt(&text), Err(CipherError::TableTooLarge));
    }

    #[test]
    fn test_table_at_row_limit_is_accepted() {
        let cipher = RouteCipher::new(1).unwrap();
        let text = "А".repeat(10_000);
        let ciphertext = cipher.encrypt(&text).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), text);
    }

    #[test]
    fn test_output_length_equals_input_length() {
        let cipher = RouteCipher::new(5).unwrap();
        for text in ["ПЕРЕСТАНОВКА", "ШИФР МАРШРУТА", "АБВГД"] {
            let ciphertext = cipher.encrypt(text).unwrap();
            assert_eq!(ciphertext.chars().count(), text.chars().count());
        }
    }
}
