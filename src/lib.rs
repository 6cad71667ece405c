//! Classical Vigenère and Atbash substitution ciphers.
//!
//! Both ciphers work symbol-by-symbol over a configurable [`Alphabet`].
//! A [`Configuration`] bundles the alphabet with two policies: whether
//! the case of letters is restored on output, and whether characters
//! outside the alphabet pass through unchanged or abort the operation.
//!
//! These are educational ciphers. They provide no security.
//!
//! # Architecture
//!
//! ```text
//! Alphabet       (ordered symbols; four shared presets)
//!     ↓ validated + indexed
//! Configuration  (alphabet + preserve_case + ignore_unknown)
//!     ↓ borrowed per call
//! TextCipher     ── Atbash   (Key = ())   index i → size-1-i
//!                └─ Vigenere (Key = str)  index i → i ± key[k] mod size
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with Vigenère over the Spanish alphabet:
//!
//! ```
//! use clasicrypt::{AlphabetPreset, Configuration, TextCipher, Vigenere};
//!
//! let config = Configuration::from_preset(AlphabetPreset::Spanish, true, true);
//! let cipher = Vigenere::new(config);
//!
//! let hidden = cipher.encrypt("Hola Mundo", "CLAVE").unwrap();
//! assert_eq!(hidden, "Jzlv Pwxdk");
//! assert_eq!(cipher.decrypt(&hidden, "CLAVE").unwrap(), "Hola Mundo");
//! ```
//!
//! Atbash is its own inverse:
//!
//! ```
//! use clasicrypt::{Atbash, Configuration};
//!
//! let config = Configuration::default();
//! let hidden = Atbash::encrypt_with("HOLA MUNDO", &config).unwrap();
//! assert_eq!(Atbash::encrypt_with(&hidden, &config).unwrap(), "HOLA MUNDO");
//! ```
//!
//! Select the algorithm and alphabet by name, as a front-end would:
//!
//! ```
//! use clasicrypt::{CipherKind, CipherSettings, Direction};
//!
//! let settings: CipherSettings = CipherSettings {
//!     alphabet: "English".into(),
//!     ..Default::default()
//! };
//! let config = settings.build();
//! let kind: CipherKind = "Vigenère".parse().unwrap();
//!
//! let hidden = kind.apply(Direction::Encrypt, "ATTACKATDAWN", "LEMON", &config).unwrap();
//! assert_eq!(hidden, "LXFOPVEFRNHR");
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod error;

pub(crate) mod utils;

pub use alphabet::{Alphabet, AlphabetPreset};
pub use cipher::{Atbash, CipherKind, Direction, TextCipher, Vigenere};
pub use config::{CipherSettings, Configuration};
pub use error::{AlphabetDefect, ClasiCryptError, Result};
