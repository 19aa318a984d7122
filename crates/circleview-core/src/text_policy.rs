//! Initial-letter extraction for avatar display text.

/// Glyph shown when the display text has no visible characters.
pub const FALLBACK_INITIAL: char = '?';

/// First character of the trimmed text, or [`FALLBACK_INITIAL`].
pub fn extract_initial(text: Option<&str>) -> char {
    text.and_then(|t| t.trim().chars().next())
        .unwrap_or(FALLBACK_INITIAL)
}
