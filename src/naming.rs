//! Slug → display title derivation.
//!
//! Album and selection directories are named with `-` or `_` as word
//! separators (`my_photo-trip/`). The display title converts both separators
//! to spaces, trims the ends, and title-cases each word:
//! - `my_photo-trip` → "My Photo Trip"
//! - `berlin-2024` → "Berlin 2024"
//!
//! Words are split on whitespace only. Punctuation inside a word is not a
//! boundary (`don't-stop` → "Don't Stop"), and internal whitespace runs are
//! preserved, never collapsed.

/// Derive a human-readable title from a directory slug.
///
/// Replaces every `-` and `_` with a space, trims leading/trailing
/// whitespace, then capitalizes the first letter of each whitespace-separated
/// word and lowercases the remainder of the word.
pub fn human_title(slug: &str) -> String {
    let spaced = slug.replace(['-', '_'], " ");
    let trimmed = spaced.trim();

    let mut title = String::with_capacity(trimmed.len());
    let mut at_word_start = true;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            title.push(c);
        } else if at_word_start {
            at_word_start = false;
            title.extend(c.to_uppercase());
        } else {
            title.extend(c.to_lowercase());
        }
    }
    title
}
