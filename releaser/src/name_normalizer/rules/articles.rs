/// Drops a leading "The" from BBS and FTP site names, so that
/// "The X BBS" and "X BBS" are not treated as two different sites.
pub fn trim_the(name: &str) -> String {
    if let Some((article, rest)) = name.split_once(' ')
        && article.eq_ignore_ascii_case("the")
        && let Some(last) = rest.rsplit(' ').next()
        && matches!(last.to_uppercase().as_str(), "BBS" | "FTP")
    {
        return rest.to_string();
    }
    name.to_string()
}
