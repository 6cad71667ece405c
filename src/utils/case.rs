//! Single-character case folding.
//!
//! Rust's `char::to_uppercase`/`to_lowercase` yield iterators because some
//! characters fold to several (`'ß'` upper-cases to `"SS"`). Substitution
//! works symbol-for-symbol, so a fold that does not produce exactly one
//! `char` leaves the character unchanged.

/// Returns the single-character upper-case form of `c`, or `c` itself.
pub(crate) fn to_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

/// Returns the single-character lower-case form of `c`, or `c` itself.
pub(crate) fn to_lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut folded: impl Iterator<Item = char>) -> Option<char> {
    match (folded.next(), folded.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
