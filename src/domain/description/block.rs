// SPDX-License-Identifier: MPL-2.0
//! Structural units produced by the description parser.

/// Marker that opens a bullet line once the line has been trimmed.
pub const BULLET_MARKER: &str = "• ";

/// One renderable unit of a project description.
///
/// Blocks are immutable once produced. The view re-derives the whole
/// sequence whenever the description text changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Consecutive plain lines joined with a single space.
    Paragraph { text: String },
    /// A plain line directly followed by bullet lines.
    Section { heading: String, items: Vec<String> },
    /// Bullet lines with no heading in front of them.
    List { items: Vec<String> },
}

/// Returns `true` if an already-trimmed line is a bullet line.
#[must_use]
pub fn is_bullet(trimmed: &str) -> bool {
    trimmed.starts_with(BULLET_MARKER)
}

/// Removes the bullet and any whitespace following it.
///
/// Expects a line for which [`is_bullet`] holds; other input is returned unchanged.
#[must_use]
pub fn strip_bullet(trimmed: &str) -> &str {
    match trimmed.strip_prefix('•') {
        Some(rest) if is_bullet(trimmed) => rest.trim_start(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_requires_trailing_space() {
        assert!(is_bullet("• item"));
        assert!(!is_bullet("•item"));
        assert!(!is_bullet("•"));
        assert!(!is_bullet("a • b"));
    }

    #[test]
    fn strip_bullet_removes_marker_and_extra_spaces() {
        assert_eq!(strip_bullet("• fast"), "fast");
        assert_eq!(strip_bullet("•    padded"), "padded");
        assert_eq!(strip_bullet("plain"), "plain");
    }
}
