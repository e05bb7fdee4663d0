use std::sync::OnceLock;

use regex::Regex;

/// Removes all the characters that cannot be used in group and author names.
/// Letters of the Latin-1 supplement are kept.
pub fn strip_chars(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^A-Za-zÀ-ÖØ-öø-ÿ0-9\-,& ]").unwrap());
    re.replace_all(s, "").to_string()
}

/// Removes everything before the first letter or number,
/// e.g. " - [*] checkbox" -> "checkbox".
pub fn strip_leading(s: &str) -> &str {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[A-Za-z0-9À-ÖØ-öø-ÿ]").unwrap());
    match re.find(s) {
        Some(m) => &s[m.start()..],
        None => "",
    }
}

pub fn collapse_spaces(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").unwrap());
    re.replace_all(s, " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_chars() {
        let test_cases = vec![
            ("", ""),
            ("ooÖØöøO", "ooÖØöøO"),
            ("o.o|Ö+Ø=ö^ø#O", "ooÖØöøO"),
            ("A Café!", "A Café"),
            ("brunräven - över", "brunräven - över"),
            (".~[Hello]~.", "Hello"),
            ("defacto2.net", "defacto2net"),
            ("!!!OMG-WTF???", "OMG-WTF"),
            ("TDT / TRSi", "TDT  TRSi"),
            ("Razor 1911 & Skillion, TRSi", "Razor 1911 & Skillion, TRSi"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(strip_chars(input), expected);
        }
    }

    #[test]
    fn test_strip_leading() {
        let test_cases = vec![
            ("", ""),
            ("hello world", "hello world"),
            ("--argument", "argument"),
            ("!!!OMG-WTF", "OMG-WTF"),
            ("#ÖØöøO", "ÖØöøO"),
            ("!@#$%^&A(+)ooÖØöøO", "A(+)ooÖØöøO"),
            (" - [*] checkbox", "checkbox"),
            (" - [*] ", ""),
        ];
        for (input, expected) in test_cases {
            assert_eq!(strip_leading(input), expected);
        }
    }

    #[test]
    fn test_collapse_spaces() {
        let test_cases = vec![
            ("abc", "abc"),
            ("a b c", "a b c"),
            ("a  b  c", "a b c"),
            ("hello              world", "hello world"),
            ("  hello \t\n world  ", " hello world "),
        ];
        for (input, expected) in test_cases {
            assert_eq!(collapse_spaces(input), expected);
        }
    }
}
