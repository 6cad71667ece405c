//! Alphabet: the ordered symbol space the ciphers substitute over.
//!
//! An [`Alphabet`] is an immutable, ordered sequence of symbols with a
//! display name. Four process-wide presets are provided through
//! [`AlphabetPreset`], created lazily on first access and shared by
//! reference count.
//!
//! ```text
//! Spanish       ABCDEFGHIJKLMNÑOPQRSTUVWXYZ                    27
//! English       ABCDEFGHIJKLMNOPQRSTUVWXYZ                     26
//! Alphanumeric  A-Z 0-9                                        36
//! Complete      A-Z a-z 0-9 " .,:;!?"  (case-sensitive)        69
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::error::{AlphabetDefect, ClasiCryptError};
use crate::utils::case;

static SPANISH: LazyLock<Arc<Alphabet>> =
    LazyLock::new(|| Arc::new(Alphabet::from_preset(AlphabetPreset::Spanish)));
static ENGLISH: LazyLock<Arc<Alphabet>> =
    LazyLock::new(|| Arc::new(Alphabet::from_preset(AlphabetPreset::English)));
static ALPHANUMERIC: LazyLock<Arc<Alphabet>> =
    LazyLock::new(|| Arc::new(Alphabet::from_preset(AlphabetPreset::Alphanumeric)));
static COMPLETE: LazyLock<Arc<Alphabet>> =
    LazyLock::new(|| Arc::new(Alphabet::from_preset(AlphabetPreset::Complete)));

/// Built-in alphabets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlphabetPreset {
    /// Upper-case Latin letters including `Ñ` after `N`.
    #[default]
    Spanish,
    /// Upper-case Latin letters.
    English,
    /// Upper-case Latin letters followed by the ten digits.
    Alphanumeric,
    /// Upper and lower case letters, digits, space and `.,:;!?`.
    ///
    /// The only case-sensitive preset: `a` and `A` are distinct symbols.
    Complete,
}

impl AlphabetPreset {
    /// All presets, in the order a selector should list them.
    pub const ALL: [AlphabetPreset; 4] = [
        AlphabetPreset::Spanish,
        AlphabetPreset::English,
        AlphabetPreset::Alphanumeric,
        AlphabetPreset::Complete,
    ];

    /// Display name of the preset.
    pub fn name(self) -> &'static str {
        match self {
            AlphabetPreset::Spanish => "Spanish",
            AlphabetPreset::English => "English",
            AlphabetPreset::Alphanumeric => "Alphanumeric",
            AlphabetPreset::Complete => "Complete",
        }
    }

    /// Label used by the Spanish-language front-end, accepted by lookups.
    fn label(self) -> &'static str {
        match self {
            AlphabetPreset::Spanish => "Español",
            AlphabetPreset::English => "Inglés",
            AlphabetPreset::Alphanumeric => "Alfanumérico",
            AlphabetPreset::Complete => "Completo",
        }
    }

    /// Symbols of the preset, in index order.
    pub fn symbols(self) -> &'static str {
        match self {
            AlphabetPreset::Spanish => "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ",
            AlphabetPreset::English => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            AlphabetPreset::Alphanumeric => "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
            AlphabetPreset::Complete => {
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 .,:;!?"
            }
        }
    }

    /// Whether lookups against this preset compare characters as-is.
    pub fn is_case_sensitive(self) -> bool {
        matches!(self, AlphabetPreset::Complete)
    }

    /// Returns the shared alphabet for this preset.
    pub fn alphabet(self) -> Arc<Alphabet> {
        let shared: &Arc<Alphabet> = match self {
            AlphabetPreset::Spanish => &SPANISH,
            AlphabetPreset::English => &ENGLISH,
            AlphabetPreset::Alphanumeric => &ALPHANUMERIC,
            AlphabetPreset::Complete => &COMPLETE,
        };
        Arc::clone(shared)
    }

    /// Resolves `name` to a preset, falling back to the default
    /// ([`AlphabetPreset::Spanish`]) when the name is not recognised.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse::<Self>().unwrap_or_default()
    }
}

impl fmt::Display for AlphabetPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlphabetPreset {
    type Err = ClasiCryptError;

    /// Strict lookup by display name or front-end label.
    ///
    /// Comparison ignores surrounding whitespace and ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AlphabetPreset::ALL
            .into_iter()
            .find(|p| {
                p.name().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ClasiCryptError::UnknownAlphabet(s.to_string()))
    }
}

/// Ordered set of symbols defining the valid domain of a cipher.
///
/// An `Alphabet` is never mutated after construction. Uniqueness,
/// non-emptiness and upper-case storage for case-insensitive alphabets
/// are not checked here; they are enforced when a
/// [`Configuration`](crate::Configuration) is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    name: Cow<'static, str>,
    symbols: Vec<char>,
    case_sensitive: bool,
}

impl Alphabet {
    /// Creates a case-insensitive alphabet from the characters of `symbols`.
    ///
    /// Lookups upper-case their input, so symbols must be stored upper
    /// case unless [`with_case_sensitivity`](Self::with_case_sensitivity)
    /// is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use clasicrypt::Alphabet;
    ///
    /// let abc = Alphabet::new("Short", "ABC");
    /// assert_eq!(abc.size(), 3);
    /// assert_eq!(abc.index_of('C'), Some(2));
    /// ```
    pub fn new(name: impl Into<Cow<'static, str>>, symbols: &str) -> Self {
        Alphabet {
            name: name.into(),
            symbols: symbols.chars().collect(),
            case_sensitive: false,
        }
    }

    /// Sets whether lookups compare characters as-is (`true`) or
    /// upper-case them first (`false`, the default).
    pub fn with_case_sensitivity(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    fn from_preset(preset: AlphabetPreset) -> Self {
        Alphabet::new(preset.name(), preset.symbols())
            .with_case_sensitivity(preset.is_case_sensitive())
    }

    /// Returns the shared alphabet for `preset`.
    pub fn preset(preset: AlphabetPreset) -> Arc<Self> {
        preset.alphabet()
    }

    /// Returns the preset called `name`, or the Spanish alphabet when the
    /// name is not recognised. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use clasicrypt::Alphabet;
    ///
    /// assert_eq!(Alphabet::from_name("English").size(), 26);
    /// assert_eq!(Alphabet::from_name("no such alphabet").name(), "Spanish");
    /// ```
    pub fn from_name(name: &str) -> Arc<Self> {
        AlphabetPreset::from_name_or_default(name).alphabet()
    }

    /// Display names of every preset, for populating a selector.
    pub fn available_names() -> Vec<&'static str> {
        AlphabetPreset::ALL.iter().map(|p| p.name()).collect()
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether lookups compare characters as-is.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Position of `c`, compared exactly, or `None` if absent.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == c)
    }

    /// Symbol at `index`, or `None` if `index >= size()`.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Symbol at `index`.
    ///
    /// # Panics
    /// Panics if `index >= size()`.
    pub(crate) fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Checks that the alphabet is non-empty and has no repeated symbols,
    /// and that a case-insensitive alphabet stores every symbol upper case.
    pub(crate) fn check(&self) -> Result<(), AlphabetDefect> {
        if self.symbols.is_empty() {
            return Err(AlphabetDefect::Empty);
        }
        if !self.case_sensitive {
            if let Some(&c) = self.symbols.iter().find(|&&c| case::to_upper(c) != c) {
                return Err(AlphabetDefect::UnreachableSymbol(c));
            }
        }
        let mut seen = HashSet::with_capacity(self.symbols.len());
        match self.symbols.iter().find(|&&c| !seen.insert(c)) {
            Some(&dup) => Err(AlphabetDefect::DuplicateSymbol(dup)),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(Alphabet::preset(AlphabetPreset::Spanish).size(), 27);
        assert_eq!(Alphabet::preset(AlphabetPreset::English).size(), 26);
        assert_eq!(Alphabet::preset(AlphabetPreset::Alphanumeric).size(), 36);
        assert_eq!(Alphabet::preset(AlphabetPreset::Complete).size(), 69);
    }

    #[test]
    fn test_spanish_enye_position() {
        let es = Alphabet::preset(AlphabetPreset::Spanish);
        assert_eq!(es.index_of('N'), Some(13));
        assert_eq!(es.index_of('Ñ'), Some(14));
        assert_eq!(es.index_of('O'), Some(15));
        assert_eq!(es.char_at(14), Some('Ñ'));
    }

    #[test]
    fn test_index_of_is_exact() {
        let en = Alphabet::preset(AlphabetPreset::English);
        assert_eq!(en.index_of('A'), Some(0));
        assert_eq!(en.index_of('a'), None);
        assert_eq!(en.index_of(' '), None);
    }

    #[test]
    fn test_char_at_out_of_range() {
        let en = Alphabet::preset(AlphabetPreset::English);
        assert_eq!(en.char_at(25), Some('Z'));
        assert_eq!(en.char_at(26), None);
    }

    #[test]
    fn test_presets_are_shared() {
        let a = Alphabet::preset(AlphabetPreset::Complete);
        let b = Alphabet::from_name("Complete");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_only_complete_is_case_sensitive() {
        for preset in AlphabetPreset::ALL {
            assert_eq!(
                preset.alphabet().is_case_sensitive(),
                preset == AlphabetPreset::Complete,
                "{preset}"
            );
        }
    }

    #[test]
    fn test_lookup_accepts_labels_and_ignores_ascii_case() {
        assert_eq!("english".parse(), Ok(AlphabetPreset::English));
        assert_eq!(" ALPHANUMERIC ".parse(), Ok(AlphabetPreset::Alphanumeric));
        assert_eq!("Español".parse(), Ok(AlphabetPreset::Spanish));
        assert_eq!("Inglés".parse(), Ok(AlphabetPreset::English));
        assert_eq!("Alfanumérico".parse(), Ok(AlphabetPreset::Alphanumeric));
        assert_eq!("completo".parse(), Ok(AlphabetPreset::Complete));
    }

    #[test]
    fn test_strict_lookup_rejects_unknown() {
        assert_eq!(
            "Greek".parse::<AlphabetPreset>(),
            Err(ClasiCryptError::UnknownAlphabet("Greek".to_string()))
        );
    }

    #[test]
    fn test_lenient_lookup_falls_back_to_spanish() {
        assert_eq!(Alphabet::from_name("").name(), "Spanish");
        assert_eq!(Alphabet::from_name("Greek").name(), "Spanish");
        assert_eq!(AlphabetPreset::from_name_or_default("Greek"), AlphabetPreset::Spanish);
    }

    #[test]
    fn test_available_names_order() {
        assert_eq!(
            Alphabet::available_names(),
            vec!["Spanish", "English", "Alphanumeric", "Complete"]
        );
    }

    #[test]
    fn test_presets_pass_check() {
        for preset in AlphabetPreset::ALL {
            assert_eq!(preset.alphabet().check(), Ok(()), "{preset}");
        }
    }

    #[test]
    fn test_check_reports_defects() {
        assert_eq!(Alphabet::new("Empty", "").check(), Err(AlphabetDefect::Empty));
        assert_eq!(
            Alphabet::new("Dup", "ABCA").check(),
            Err(AlphabetDefect::DuplicateSymbol('A'))
        );
        assert_eq!(
            Alphabet::new("Lower", "ABc").check(),
            Err(AlphabetDefect::UnreachableSymbol('c'))
        );
        assert_eq!(
            Alphabet::new("Lower", "ABc").with_case_sensitivity(true).check(),
            Ok(())
        );
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(Alphabet::new("Custom", "XYZ").to_string(), "Custom");
        assert_eq!(AlphabetPreset::Alphanumeric.to_string(), "Alphanumeric");
    }
}
