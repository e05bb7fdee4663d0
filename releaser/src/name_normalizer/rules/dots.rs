/// Removes a single trailing dot, e.g. "hello.." -> "hello.".
/// A lone "." is kept.
pub fn trim_trailing_dot(s: &str) -> &str {
    if s.chars().count() < 2 {
        return s;
    }
    s.strip_suffix('.').unwrap_or(s)
}
