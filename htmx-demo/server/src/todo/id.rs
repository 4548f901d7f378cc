//! Identifier generation for to-do items.
//!
//! IDs double as HTML element ids and CSS selectors in rendered fragments,
//! so they must begin with a letter.

use uuid::Uuid;

/// Prefix applied to tokens that do not start with a letter.
///
/// Not a hex digit, so prefixed and unprefixed tokens never collide.
pub const ID_PREFIX: char = 't';

/// Generates a new random item ID backed by a v4 UUID.
pub fn generate() -> String {
    ensure_alphabetic_start(Uuid::new_v4().simple().to_string())
}

/// Prefixes `token` with [`ID_PREFIX`] unless it already starts with an ASCII letter.
pub fn ensure_alphabetic_start(token: String) -> String {
    match token.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => token,
        _ => format!("{ID_PREFIX}{token}"),
    }
}
