//! Reversible encoding between releaser names and URL path slugs.
//!
//! A slug is the partial URL path of a releaser, e.g. `razor-1911-demo*trsi`.
//! Spaces become dashes, literal dashes become underscores, `" & "` becomes
//! `-ampersand-` and the `", "` group separator becomes `*`.

use std::{borrow::Borrow, fmt, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::CoreTypeError;

/// Replacements applied by [`encode`], in order. A literal dash has to be
/// protected as `_` before spaces are turned into dashes.
const ENCODE_STEPS: [(&str, &str); 5] = [
    ("-", "_"),
    (" & ", "-ampersand-"),
    (", ", "*"),
    (",", "*"),
    (" ", "-"),
];

/// Replacements applied by [`decode`], in order. The ampersand marker contains
/// dashes so it must be restored before dashes become spaces, and underscores
/// may only become dashes after that.
const DECODE_STEPS: [(&str, &str); 4] = [
    ("-ampersand-", " & "),
    ("-", " "),
    ("_", "-"),
    ("*", ", "),
];

/// Returns true if the path only uses lowercase alphanumeric characters,
/// dashes, underscores, ampersands and asterisks.
///
/// Example:
///
/// ```
/// assert!(core_types::slug::valid("acid-productions"));
/// assert!(!core_types::slug::valid("acid-productions!"));
/// assert!(!core_types::slug::valid(""));
/// ```
pub fn valid(path: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[a-z0-9&\-_*]+$").unwrap());
    re.is_match(path)
}

/// Formats a name to be used as a URL path.
///
/// Casing and characters outside of `[a-z0-9&-, ]` are dropped, so the result
/// of an empty or fully stripped name is an empty string.
///
/// Example:
///
/// ```
/// use core_types::slug::encode;
/// assert_eq!(encode("ACiD Productions"), "acid-productions");
/// assert_eq!(encode("Razor 1911 Demo & Skillion"), "razor-1911-demo-ampersand-skillion");
/// assert_eq!(encode("TDU-Jam!"), "tdu_jam");
/// ```
pub fn encode(name: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^a-z0-9&\-, ]").unwrap());

    let lowered = name.trim().to_lowercase();
    let stripped = re.replace_all(&lowered, "");
    ENCODE_STEPS
        .iter()
        .fold(stripped.into_owned(), |s, (from, to)| s.replace(from, to))
}

/// Deobfuscates the URL path into a lowercase, human-readable name.
///
/// # errors
/// * `CoreTypeError::InvalidPath`: If the path contains characters not allowed by [`valid`].
pub fn decode(path: &str) -> Result<String, CoreTypeError> {
    if !valid(path) {
        return Err(CoreTypeError::InvalidPath(path.to_string()));
    }
    Ok(DECODE_STEPS
        .iter()
        .fold(path.to_lowercase(), |s, (from, to)| s.replace(from, to)))
}

/// A URL path that is known to be [`valid`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(path: &str) -> Result<Self, CoreTypeError> {
        Self::try_from(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercase name the path decodes to.
    pub fn humanize(&self) -> String {
        DECODE_STEPS
            .iter()
            .fold(self.0.clone(), |s, (from, to)| s.replace(from, to))
    }
}

impl TryFrom<String> for Slug {
    type Error = CoreTypeError;
    fn try_from(path: String) -> Result<Self, Self::Error> {
        if valid(&path) {
            Ok(Slug(path))
        } else {
            Err(CoreTypeError::InvalidPath(path))
        }
    }
}

impl TryFrom<&str> for Slug {
    type Error = CoreTypeError;
    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::parse(path)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        let test_cases = vec![
            ("defacto2", true),
            ("acid-productions", true),
            ("razor-1911-demo*trsi", true),
            ("tristar-ampersand-red-sector-inc", true),
            ("north-american-pirate_phreak-association", true),
            ("tristar-&-red-sector-inc", true),
            ("", false),
            ("Defacto2", false),
            ("acid-productions!", false),
            ("razor-1911-demo#trsi", false),
            ("path/to/file", false),
            ("/razor-1911//", false),
            ("razor 1911", false),
        ];
        for (input, expected) in test_cases {
            assert_eq!(valid(input), expected, "valid({input:?})");
        }
    }

    #[test]
    fn test_encode() {
        let test_cases = vec![
            ("", ""),
            ("HeLlo", "hello"),
            ("Hello World", "hello-world"),
            ("Ben & Jerry's", "ben-ampersand-jerrys"),
            ("John, Paul, George, Ringo", "john*paul*george*ringo"),
            (
                "The quick brown fox jumps over the lazy dog, but the dog is faster",
                "the-quick-brown-fox-jumps-over-the-lazy-dog*but-the-dog-is-faster",
            ),
            ("ACiD Productions", "acid-productions"),
            ("TDU-Jam!", "tdu_jam"),
            ("North American Pirate-Phreak Association", "north-american-pirate_phreak-association"),
            ("Class,Paradigm", "class*paradigm"),
            ("  Razor 1911  ", "razor-1911"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(encode(input), expected, "encode({input:?})");
        }
    }

    #[test]
    fn test_encode_steps_are_order_sensitive() {
        // Running the space replacement first would turn the protected
        // dash of "pirate-phreak" into a word separator.
        let name = "pirate-phreak & co";
        let reordered = ENCODE_STEPS
            .iter()
            .rev()
            .fold(name.to_string(), |s, (from, to)| s.replace(from, to));
        assert_ne!(reordered, encode(name));
        assert_eq!(encode(name), "pirate_phreak-ampersand-co");
    }

    #[test]
    fn test_decode() {
        let test_cases = vec![
            ("defacto2", "defacto2"),
            ("razor-1911-demo", "razor 1911 demo"),
            ("razor-1911-demo*trsi", "razor 1911 demo, trsi"),
            ("path-ampersand-path", "path & path"),
            ("path_with_underscore", "path-with-underscore"),
            ("path*with*asterisk", "path, with, asterisk"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(decode(input).unwrap(), expected, "decode({input:?})");
        }
    }

    #[test]
    fn test_decode_invalid_path() {
        for input in ["", "path/to/file", "razor-1911-demo#trsi", "Razor-1911"] {
            assert_eq!(
                decode(input),
                Err(CoreTypeError::InvalidPath(input.to_string()))
            );
        }
    }

    #[test]
    fn test_marker_round_trip() {
        let names = vec![
            "razor 1911 demo",
            "razor 1911 demo & skillion",
            "class, paradigm, razor 1911",
            "north american pirate-phreak association",
            "tristar & red sector inc, the dream team",
        ];
        for name in names {
            assert_eq!(decode(&encode(name)).unwrap(), name);
        }
    }

    #[test]
    fn test_slug_parse() {
        let slug = Slug::parse("razor-1911-demo*trsi").unwrap();
        assert_eq!(slug.as_str(), "razor-1911-demo*trsi");
        assert_eq!(slug.to_string(), "razor-1911-demo*trsi");
        assert_eq!(slug.humanize(), "razor 1911 demo, trsi");
        assert!(Slug::parse("Razor 1911").is_err());
        assert!(Slug::try_from("").is_err());
    }

    #[test]
    fn test_slug_serde() {
        let slug: Slug = serde_json::from_str("\"acid-productions\"").unwrap();
        assert_eq!(slug.as_str(), "acid-productions");
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"acid-productions\"");
        assert!(serde_json::from_str::<Slug>("\"ACiD Productions\"").is_err());
    }
}
