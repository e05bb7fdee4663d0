use std::sync::OnceLock;

use regex::Regex;

use super::chars::collapse_spaces;

/// Formats the ampersand so it can be encoded in a URL path.
/// Repeated ampersands are merged, leading and trailing ones are dropped and
/// the remaining ones get a single space on each side,
/// e.g. "hello&&world" -> "hello & world".
pub fn amp(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    static DUPES: OnceLock<Regex> = OnceLock::new();
    static SPACING: OnceLock<Regex> = OnceLock::new();
    let dupes = DUPES.get_or_init(|| Regex::new(r"&+").unwrap());
    let spacing = SPACING.get_or_init(|| Regex::new(r"\s*&\s*").unwrap());

    let merged = dupes.replace_all(s, "&");
    let trimmed = merged.trim_matches('&');
    // neighbouring ampersands both claim the space between them
    collapse_spaces(&spacing.replace_all(trimmed, " & "))
}
