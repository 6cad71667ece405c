//! Configuration: an alphabet plus the case and unknown-character policies.
//!
//! A [`Configuration`] validates its alphabet once, derives a
//! character-to-index map for O(1) lookup and is immutable afterwards.
//! [`CipherSettings`] is the serde-friendly form a front-end collects
//! (preset name and two flags) and turns into a `Configuration`.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet::{Alphabet, AlphabetPreset};
use crate::error::{ClasiCryptError, Result};
use crate::utils::case;

/// Alphabet and behaviour flags shared by both ciphers.
///
/// Case-insensitive alphabets (every preset except
/// [`AlphabetPreset::Complete`]) upper-case input before lookup; the
/// original case is restored on output when `preserve_case` is set.
#[derive(Debug, Clone)]
pub struct Configuration {
    alphabet: Arc<Alphabet>,
    preserve_case: bool,
    ignore_unknown: bool,
    index: HashMap<char, usize>,
}

impl Default for Configuration {
    /// Spanish alphabet, case preserved, unknown characters passed through.
    fn default() -> Self {
        Self::from_preset(AlphabetPreset::default(), true, true)
    }
}

impl Configuration {
    /// Builds a configuration over `alphabet`.
    ///
    /// # Parameters
    /// - `alphabet`: Symbol space. Shared, never copied.
    /// - `preserve_case`: Restore lower case on output for letters that
    ///   were lower case on input.
    /// - `ignore_unknown`: Pass characters outside the alphabet through
    ///   unchanged instead of failing.
    ///
    /// # Errors
    /// Returns [`ClasiCryptError::InvalidAlphabet`] if the alphabet is
    /// empty, repeats a symbol, or is case-insensitive and stores a symbol
    /// that is not upper case.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use clasicrypt::{Alphabet, Configuration};
    ///
    /// let ok = Configuration::new(Arc::new(Alphabet::new("ABC", "ABC")), true, true);
    /// assert!(ok.is_ok());
    ///
    /// let dup = Configuration::new(Arc::new(Alphabet::new("ABA", "ABA")), true, true);
    /// assert!(dup.is_err());
    /// ```
    pub fn new(alphabet: Arc<Alphabet>, preserve_case: bool, ignore_unknown: bool) -> Result<Self> {
        alphabet
            .check()
            .map_err(|reason| ClasiCryptError::InvalidAlphabet { reason })?;
        Ok(Self::assemble(alphabet, preserve_case, ignore_unknown))
    }

    /// Builds a configuration over a built-in alphabet.
    ///
    /// Presets are always valid, so this cannot fail.
    pub fn from_preset(preset: AlphabetPreset, preserve_case: bool, ignore_unknown: bool) -> Self {
        Self::assemble(preset.alphabet(), preserve_case, ignore_unknown)
    }

    fn assemble(alphabet: Arc<Alphabet>, preserve_case: bool, ignore_unknown: bool) -> Self {
        let index = alphabet
            .symbols()
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();
        debug!(
            alphabet = %alphabet,
            size = alphabet.size(),
            preserve_case,
            ignore_unknown,
            "configuration built"
        );
        Configuration {
            alphabet,
            preserve_case,
            ignore_unknown,
            index,
        }
    }

    /// The shared alphabet.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Whether lower-case input letters come back lower case.
    pub fn preserve_case(&self) -> bool {
        self.preserve_case
    }

    /// Whether characters outside the alphabet pass through unchanged.
    pub fn ignore_unknown(&self) -> bool {
        self.ignore_unknown
    }

    /// Number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    /// Alphabet index of `c` after case normalisation, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clasicrypt::{AlphabetPreset, Configuration};
    ///
    /// let es = Configuration::from_preset(AlphabetPreset::Spanish, true, true);
    /// assert_eq!(es.index_of('ñ'), Some(14));
    ///
    /// let full = Configuration::from_preset(AlphabetPreset::Complete, true, true);
    /// assert_eq!(full.index_of('a'), Some(26));
    /// ```
    pub fn index_of(&self, c: char) -> Option<usize> {
        let key = if self.alphabet.is_case_sensitive() {
            c
        } else {
            case::to_upper(c)
        };
        self.index.get(&key).copied()
    }

    /// Resolves `c` to its index and records whether it was lower case.
    pub fn normalize_input(&self, c: char) -> (Option<usize>, bool) {
        (self.index_of(c), c.is_lowercase())
    }

    /// Maps `index` back to a symbol, lower-casing it when case is
    /// preserved, the input was lower case and the alphabet is
    /// case-insensitive.
    ///
    /// # Panics
    /// Panics if `index >= size()`.
    pub fn map_output(&self, index: usize, was_lowercase: bool) -> char {
        let symbol = self.alphabet.symbol(index);
        if self.preserve_case && was_lowercase && !self.alphabet.is_case_sensitive() {
            case::to_lower(symbol)
        } else {
            symbol
        }
    }

    /// Applies the unknown-character policy to `c`.
    ///
    /// Returns `Ok(())` when `c` should be copied to the output unchanged.
    pub(crate) fn pass_through(&self, c: char) -> Result<()> {
        if self.ignore_unknown {
            Ok(())
        } else {
            Err(ClasiCryptError::CharacterOutOfAlphabet(c))
        }
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.alphabet, &other.alphabet) || self.alphabet == other.alphabet)
            && self.preserve_case == other.preserve_case
            && self.ignore_unknown == other.ignore_unknown
    }
}

impl Eq for Configuration {}

/// The values a front-end collects to configure a cipher.
///
/// Missing fields take their defaults when deserialized.
///
/// ```
/// use clasicrypt::CipherSettings;
///
/// let settings = CipherSettings {
///     alphabet: "English".into(),
///     ..Default::default()
/// };
/// let config = settings.build();
/// assert_eq!(config.size(), 26);
/// assert!(config.preserve_case());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherSettings {
    /// Preset name; unrecognised names resolve to Spanish.
    pub alphabet: String,
    /// Restore lower case on output.
    pub preserve_case: bool,
    /// Pass unknown characters through instead of failing.
    pub ignore_unknown: bool,
}

impl Default for CipherSettings {
    fn default() -> Self {
        CipherSettings {
            alphabet: AlphabetPreset::default().name().to_string(),
            preserve_case: true,
            ignore_unknown: true,
        }
    }
}

impl CipherSettings {
    /// Resolves the alphabet leniently and builds the configuration.
    pub fn build(&self) -> Configuration {
        Configuration::from_preset(
            AlphabetPreset::from_name_or_default(&self.alphabet),
            self.preserve_case,
            self.ignore_unknown,
        )
    }
}

impl From<&Configuration> for CipherSettings {
    fn from(config: &Configuration) -> Self {
        CipherSettings {
            alphabet: config.alphabet().name().to_string(),
            preserve_case: config.preserve_case(),
            ignore_unknown: config.ignore_unknown(),
        }
    }
}
