//! Character-level helpers shared by every analysis
//!
//! Lengths are counted in Unicode scalar values, never bytes, so a Japanese
//! sentence and an English sentence of the same visible length compare
//! equally.

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// ASCII `0-9` or full-width `０-９`
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c)
}

/// Full-width digit `０-９`
pub fn is_fullwidth_digit(c: char) -> bool {
    ('０'..='９').contains(&c)
}

/// Whether `text` contains at least one digit
pub fn has_digit(text: &str) -> bool {
    text.chars().any(is_digit)
}

/// Whether `text` is empty or whitespace only (including the ideographic space)
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
