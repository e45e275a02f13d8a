//! # Identifier Validation
//!
//! Checks candidate strings against the canonical UUID textual grammar.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Canonical 8-4-4-4-12 grouping, version nibble 3 or 4, variant nibble
    // 8/9/a/b.
    static ref UUID_PATTERN: Regex = Regex::new(
        "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[34][0-9a-fA-F]{3}-[89ab][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$"
    )
    .expect("UUID pattern is valid");
}

/// Whether `text` is a well-formed UUID string.
///
/// Hex digits are accepted in either case, but the separator structure must
/// match exactly and the version/variant nibbles are constrained to
/// versions 3-4, variant 1. Non-matching input yields `false`; this never
/// fails.
///
/// # Examples
///
/// ```rust
/// use shop_compat::is_uuid;
///
/// assert!(is_uuid("550e8400-e29b-41d4-a716-446655440000"));
/// assert!(!is_uuid("not-a-uuid"));
/// ```
pub fn is_uuid(text: &str) -> bool {
    UUID_PATTERN.is_match(text)
}
