//! Loose string comparison for free-text course names.
//!
//! Curated course names and user labels disagree on case and punctuation
//! ("B.Tech CSE" vs "btech"), so both sides are lower-cased and stripped of
//! ASCII punctuation before comparing. Whitespace is kept.

/// Lower-case `text` and drop ASCII punctuation.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Bidirectional containment of two already-normalized strings.
///
/// Empty strings never overlap: they are contained in everything and carry
/// no information.
pub fn overlaps(a: &str, b: &str) -> bool {
    if a.trim().is_empty() || b.trim().is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}
