//! The fixed 32-letter cipher alphabet and its index mappings.
//!
//! Both engines index uppercase Russian letters 0..31. The letter-to-index
//! mapping is a bijection on its domain: every letter maps to exactly one
//! index and back. Characters without an entry (spaces, Latin letters, Ё)
//! are not rejected here; mapping silently drops them. That two-phase
//! behavior — an alphabetic check first, the narrower table lookup second —
//! is what makes the `*HasNoValidLetters` error paths reachable.

use crate::error::CipherError;

/// The 32 uppercase letters in index order. Ё is not part of the table, so
/// indices span exactly 0..31.
pub const ALPHABET: [char; 32] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О',
    'П', 'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э',
    'Ю', 'Я',
];

/// Number of letters in the alphabet; the modulus of all shift arithmetic.
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Returns the index of `ch` in the alphabet, or `None` if it has no entry.
pub fn index_of(ch: char) -> Option<usize> {
    ALPHABET.iter().position(|&a| a == ch)
}

/// Returns the letter at `index`.
///
/// # Errors
/// Returns [`CipherError::IndexOutOfRange`] if `index >= 32`. Unreachable
/// under correct mod-32 arithmetic; reported as an error rather than a panic.
pub fn letter_at(index: usize) -> Result<char, CipherError> {
    ALPHABET
        .get(index)
        .copied()
        .ok_or(CipherError::IndexOutOfRange)
}

/// Upper-cases `s` using the full Unicode mapping.
pub fn uppercase(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}

/// Maps the characters of an already upper-cased string to alphabet indices.
///
/// Characters without an entry are dropped, so the result may be shorter
/// than the input, or empty.
pub fn to_indices(s: &str) -> Vec<usize> {
    s.chars().filter_map(index_of).collect()
}
