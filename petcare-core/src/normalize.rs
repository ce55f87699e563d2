//! Text canonicalization for ingredient matching.

/// Canonicalize text for substring matching.
///
/// Lowercases, drops all whitespace, and strips ASCII and full-width
/// parentheses. Idempotent and total; `""` maps to `""`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '（' | '）'))
        .collect()
}
