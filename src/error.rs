//! Error types for the rucrypt library.

use thiserror::Error;

/// Errors produced by the cipher engines.
///
/// Every validation failure aborts the current call and reports one of these
/// kinds; there is no silent recovery. Callers match on the kind to decide
/// how to re-prompt or retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Substitution key string is empty.
    #[error("key must not be empty")]
    EmptyKey,
    /// Substitution key contains a character that is not a letter.
    #[error("key must contain only letters")]
    InvalidKeyCharacter,
    /// Substitution key is alphabetic but contains no letters of the cipher
    /// alphabet (e.g. an all-Latin key).
    #[error("key has no letters from the cipher alphabet")]
    KeyHasNoValidLetters,
    /// Transposition column count is zero or negative.
    #[error("column count must be a positive number")]
    InvalidKey,
    /// Transposition column count exceeds the maximum of 1000.
    #[error("column count must not exceed 1000")]
    KeyTooLarge,
    /// Text argument is empty.
    #[error("text must not be empty")]
    EmptyText,
    /// Text contains a character that is neither a letter nor a space.
    #[error("text may contain only letters and spaces")]
    InvalidTextCharacter,
    /// Text contains no letters of the cipher alphabet after mapping.
    #[error("text has no letters from the cipher alphabet")]
    TextHasNoValidLetters,
    /// Transposition column count exceeds the text length.
    #[error("column count must not exceed the text length")]
    KeyExceedsTextLength,
    /// Derived transposition table would exceed the row limit of 10000.
    #[error("table is too large for transposition")]
    TableTooLarge,
    /// Computed alphabet index fell outside the alphabet bounds.
    #[error("alphabet index is out of range")]
    IndexOutOfRange,
}
