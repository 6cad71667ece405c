//! Error types for the clasicrypt library.

use std::fmt;

use thiserror::Error;

/// Why an alphabet was rejected when building a
/// [`Configuration`](crate::Configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetDefect {
    /// The alphabet has no symbols.
    Empty,
    /// The symbol appears more than once.
    DuplicateSymbol(char),
    /// A case-insensitive alphabet holds a symbol that is not its own
    /// upper-case form, so upper-cased lookups can never reach it.
    UnreachableSymbol(char),
}

impl fmt::Display for AlphabetDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetDefect::Empty => write!(f, "alphabet must not be empty"),
            AlphabetDefect::DuplicateSymbol(c) => {
                write!(f, "alphabet must not repeat symbols ('{c}' appears twice)")
            }
            AlphabetDefect::UnreachableSymbol(c) => write!(
                f,
                "case-insensitive alphabet must store symbols upper case ('{c}' is not)"
            ),
        }
    }
}

/// Errors produced by the clasicrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClasiCryptError {
    /// The alphabet is empty or contains duplicate symbols.
    #[error("Invalid alphabet: {reason}")]
    InvalidAlphabet {
        /// What is wrong with the alphabet.
        reason: AlphabetDefect,
    },

    /// The Vigenère key is empty or whitespace-only.
    #[error("Vigenère key must not be empty")]
    EmptyKey,

    /// None of the key characters belong to the configured alphabet.
    #[error("Key contains no characters of the configured alphabet")]
    KeyNotInAlphabet,

    /// An input character has no index in the alphabet and unknown
    /// characters are not being passed through.
    #[error("Character '{0}' is outside the alphabet")]
    CharacterOutOfAlphabet(char),

    /// Strict preset lookup did not recognise the name.
    #[error("Unknown alphabet preset: {0}")]
    UnknownAlphabet(String),

    /// Strict cipher lookup did not recognise the name.
    #[error("Unknown cipher: {0}")]
    UnknownCipher(String),
}

/// Result type for clasicrypt operations.
pub type Result<T> = std::result::Result<T, ClasiCryptError>;
