//! Vigenère: shift each symbol by the next index of a repeating key.
//!
//! The key is upper-cased and reduced to the indices of its in-alphabet
//! characters. Only characters that are themselves in the alphabet consume
//! a key position; passed-through characters leave the keystream where it
//! was.

use tracing::instrument;

use super::{Direction, TextCipher};
use crate::config::Configuration;
use crate::error::{ClasiCryptError, Result};
use crate::utils::case;

/// Polyalphabetic shift cipher bound to one [`Configuration`].
///
/// The key is supplied per call and never stored.
///
/// # Examples
///
/// ```
/// use clasicrypt::{AlphabetPreset, Configuration, TextCipher, Vigenere};
///
/// let cipher = Vigenere::new(Configuration::from_preset(AlphabetPreset::Spanish, true, true));
/// let hidden = cipher.encrypt("HOLA MUNDO", "CLAVE").unwrap();
/// assert_eq!(hidden, "JZLV PWXDK");
/// assert_eq!(cipher.decrypt(&hidden, "CLAVE").unwrap(), "HOLA MUNDO");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vigenere {
    config: Configuration,
}

impl Vigenere {
    /// Creates a cipher bound to `config`.
    pub fn new(config: Configuration) -> Self {
        Vigenere { config }
    }

    /// The configuration this cipher was built with.
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

impl TextCipher for Vigenere {
    type Key = str;

    fn encrypt(&self, plaintext: &str, key: &str) -> Result<String> {
        shift_text(&self.config, plaintext, key, Direction::Encrypt)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String> {
        shift_text(&self.config, ciphertext, key, Direction::Decrypt)
    }
}

/// Reduces `key` to its keystream: the alphabet indices of its upper-cased
/// characters, in order, skipping characters outside the alphabet.
///
/// # Errors
/// - [`ClasiCryptError::EmptyKey`] if `key` is empty or whitespace-only.
/// - [`ClasiCryptError::KeyNotInAlphabet`] if no character survives.
fn key_shifts(config: &Configuration, key: &str) -> Result<Vec<usize>> {
    if key.trim().is_empty() {
        return Err(ClasiCryptError::EmptyKey);
    }
    let shifts: Vec<usize> = key
        .chars()
        .map(case::to_upper)
        .filter_map(|k| config.index_of(k))
        .collect();
    if shifts.is_empty() {
        return Err(ClasiCryptError::KeyNotInAlphabet);
    }
    Ok(shifts)
}

#[instrument(
    level = "trace",
    skip_all,
    fields(direction = %direction, alphabet = %config.alphabet(), len = text.chars().count())
)]
pub(super) fn shift_text(
    config: &Configuration,
    text: &str,
    key: &str,
    direction: Direction,
) -> Result<String> {
    let shifts = key_shifts(config, key)?;
    let size = config.size();
    let mut output = String::with_capacity(text.len());
    let mut key_pos = 0usize;

    for c in text.chars() {
        let (index, was_lowercase) = config.normalize_input(c);
        let Some(index) = index else {
            config.pass_through(c)?;
            output.push(c);
            continue;
        };

        // shift < size, so adding size before subtracting keeps the
        // result in [0, size) without signed arithmetic.
        let shift = shifts[key_pos % shifts.len()];
        let shifted = match direction {
            Direction::Encrypt => (index + shift) % size,
            Direction::Decrypt => (index + size - shift) % size,
        };
        output.push(config.map_output(shifted, was_lowercase));
        key_pos += 1;
    }

    Ok(output)
}
