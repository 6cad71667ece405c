//! Cipher transforms over a [`Configuration`].
//!
//! Both ciphers implement [`TextCipher`], parameterised by their key type:
//! [`Atbash`] takes no key (`()`), [`Vigenere`] takes a `str`.
//! [`CipherKind`] selects between them at run time for callers that only
//! know the algorithm by name.

mod atbash;
mod vigenere;

pub use atbash::Atbash;
pub use vigenere::Vigenere;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::error::{ClasiCryptError, Result};

/// Which way a transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Text cipher keyed by `Self::Key`.
///
/// Implementations hold no per-call state, so one instance may be shared
/// across threads and called concurrently.
pub trait TextCipher {
    /// Key type; `()` for keyless ciphers.
    type Key: ?Sized;

    /// Encrypts `plaintext` with `key`.
    ///
    /// # Errors
    /// Fails without producing output if the key is unusable or an
    /// out-of-alphabet character is met while unknown characters are
    /// not being passed through.
    fn encrypt(&self, plaintext: &str, key: &Self::Key) -> Result<String>;

    /// Decrypts `ciphertext` with `key`.
    ///
    /// # Errors
    /// Same conditions as [`encrypt`](Self::encrypt).
    fn decrypt(&self, ciphertext: &str, key: &Self::Key) -> Result<String>;

    /// Runs [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt).
    fn apply(&self, direction: Direction, text: &str, key: &Self::Key) -> Result<String> {
        match direction {
            Direction::Encrypt => self.encrypt(text, key),
            Direction::Decrypt => self.decrypt(text, key),
        }
    }
}

/// Available algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherKind {
    #[default]
    Vigenere,
    Atbash,
}

impl CipherKind {
    /// All algorithms, in the order a selector should list them.
    pub const ALL: [CipherKind; 2] = [CipherKind::Vigenere, CipherKind::Atbash];

    /// Display name, accepted back by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Vigenere => "Vigenère",
            CipherKind::Atbash => "Atbash",
        }
    }

    /// One-line explanation for display next to the selector.
    pub fn description(self) -> &'static str {
        match self {
            CipherKind::Vigenere => {
                "Polyalphabetic cipher that repeats a key cyclically; each letter is \
                 shifted by the corresponding key letter."
            }
            CipherKind::Atbash => {
                "Monoalphabetic substitution that reverses the alphabet (A\u{2194}Z, \
                 B\u{2194}Y, ...); encryption and decryption are the same operation."
            }
        }
    }

    /// Whether [`apply`](Self::apply) reads its `key` argument.
    pub fn requires_key(self) -> bool {
        matches!(self, CipherKind::Vigenere)
    }

    /// Runs the algorithm over `text` with `config`.
    ///
    /// `key` is ignored by Atbash.
    ///
    /// # Errors
    /// See [`TextCipher::encrypt`].
    ///
    /// # Examples
    ///
    /// ```
    /// use clasicrypt::{CipherKind, Configuration, Direction};
    ///
    /// let config = Configuration::default();
    /// let hidden = CipherKind::Atbash.apply(Direction::Encrypt, "ABC", "", &config).unwrap();
    /// assert_eq!(hidden, "ZYX");
    /// ```
    pub fn apply(
        self,
        direction: Direction,
        text: &str,
        key: &str,
        config: &Configuration,
    ) -> Result<String> {
        match self {
            CipherKind::Vigenere => vigenere::shift_text(config, text, key, direction),
            CipherKind::Atbash => Atbash::transform(text, config),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = ClasiCryptError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("Vigenère") || wanted.eq_ignore_ascii_case("Vigenere") {
            Ok(CipherKind::Vigenere)
        } else if wanted.eq_ignore_ascii_case("Atbash") {
            Ok(CipherKind::Atbash)
        } else {
            Err(ClasiCryptError::UnknownCipher(s.to_string()))
        }
    }
}
