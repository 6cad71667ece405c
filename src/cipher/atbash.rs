//! Atbash: reflect every symbol across the middle of the alphabet.
//!
//! Index `i` maps to `size - 1 - i`. Applying the map twice yields `i`
//! again, so encryption and decryption are the same transform.

use tracing::instrument;

use super::TextCipher;
use crate::config::Configuration;
use crate::error::Result;

/// Keyless mirror cipher.
///
/// # Examples
///
/// ```
/// use clasicrypt::{Atbash, Configuration, TextCipher};
///
/// let atbash = Atbash::new(Configuration::default());
/// let hidden = atbash.encrypt("Hola", &()).unwrap();
/// assert_eq!(hidden, "Sloz");
/// assert_eq!(atbash.decrypt(&hidden, &()).unwrap(), "Hola");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Atbash {
    config: Configuration,
}

impl Atbash {
    /// Creates a cipher bound to `config`.
    pub fn new(config: Configuration) -> Self {
        Atbash { config }
    }

    /// The configuration this cipher was built with.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Encrypts `plaintext` under `config` without building an instance.
    pub fn encrypt_with(plaintext: &str, config: &Configuration) -> Result<String> {
        Self::transform(plaintext, config)
    }

    /// Decrypts `ciphertext` under `config`. Identical to
    /// [`encrypt_with`](Self::encrypt_with).
    pub fn decrypt_with(ciphertext: &str, config: &Configuration) -> Result<String> {
        Self::transform(ciphertext, config)
    }

    /// Mirrors every in-alphabet character of `text`.
    ///
    /// # Errors
    /// Returns [`CharacterOutOfAlphabet`](crate::ClasiCryptError::CharacterOutOfAlphabet)
    /// for the first character outside the alphabet when
    /// `config.ignore_unknown()` is false.
    #[instrument(
        level = "trace",
        skip_all,
        fields(alphabet = %config.alphabet(), len = text.chars().count())
    )]
    pub fn transform(text: &str, config: &Configuration) -> Result<String> {
        let last = config.size() - 1;
        let mut output = String::with_capacity(text.len());

        for c in text.chars() {
            match config.normalize_input(c) {
                (Some(index), was_lowercase) => {
                    output.push(config.map_output(last - index, was_lowercase));
                }
                (None, _) => {
                    config.pass_through(c)?;
                    output.push(c);
                }
            }
        }

        Ok(output)
    }
}

impl TextCipher for Atbash {
    type Key = ();

    fn encrypt(&self, plaintext: &str, _key: &()) -> Result<String> {
        Self::transform(plaintext, &self.config)
    }

    fn decrypt(&self, ciphertext: &str, _key: &()) -> Result<String> {
        Self::transform(ciphertext, &self.config)
    }
}
