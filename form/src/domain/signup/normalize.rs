//! Canonicalisation of accepted signup values.
//!
//! These helpers run only after the whole draft has passed validation, so
//! each one can assume its input already satisfies the field's rules.

/// Trims, collapses whitespace runs, and upper-cases the first character
/// of each word.
///
/// The remainder of each word is left untouched, so an already upper-case
/// word stays upper-case. Idempotent on its own output.
///
/// # Examples
///
/// `canonical_name(" jane   doe ")` returns `"Jane Doe"`.
pub(super) fn canonical_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-cases an accepted email address.
pub(super) fn canonical_email(raw: &str) -> String {
    raw.to_lowercase()
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
