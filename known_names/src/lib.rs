//! Known releaser names and their alternative spellings.
//!
//! Special names are releasers whose display form uses irregular casing or
//! symbols that the casing rules cannot derive. Initialisms are alternative
//! spellings, acronyms and initialisms of a releaser, e.g. `FiRM` for
//! `the-firm`. Both tables are keyed by the releaser's URL path.

use std::{collections::BTreeMap, sync::OnceLock};

use core_types::{NameStyle, Slug};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

mod initialisms;
pub mod mock;
mod names;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnownNamesError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid table key: {0:?}")]
    InvalidKey(String),
}

/// Read-only access to the known releaser names.
pub trait NameLookupOps: Send + Sync {
    /// The styled display name of the path, if it is a special name.
    fn special(&self, path: &str) -> Option<&str>;

    /// The path of the special name whose display form equals `name`, ignoring case.
    fn find_special(&self, name: &str) -> Option<&str>;

    /// Alternative spellings of the path, or an empty slice.
    fn initialisms(&self, path: &str) -> &[String];

    /// Paths that list `name` as one of their initialisms, ignoring case.
    /// Sorted so the first entry is the lexicographically smallest path.
    fn match_initialism(&self, name: &str) -> Vec<&str>;

    fn is_initialism(&self, path: &str) -> bool {
        !self.initialisms(path).is_empty()
    }

    /// The initialisms of the path as a comma separated string,
    /// e.g. "FiRM, FRM" for `the-firm`.
    fn join_initialisms(&self, path: &str) -> String {
        self.initialisms(path).join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialName {
    pub display: String,
    pub style: NameStyle,
}

/// Raw lookup data, as written in a JSON document or in the built-in lists.
///
/// ```json
/// {
///   "names": { "acid-productions": "ACiD Productions" },
///   "lowercase": ["scenet"],
///   "uppercase": ["beer"],
///   "initialisms": { "the-firm": ["FiRM", "FRM"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameTables {
    pub names: BTreeMap<String, String>,
    pub lowercase: Vec<String>,
    pub uppercase: Vec<String>,
    pub initialisms: BTreeMap<String, Vec<String>>,
}

impl NameTables {
    pub fn builtin() -> Self {
        NameTables {
            names: names::STYLED
                .iter()
                .map(|(path, name)| (path.to_string(), name.to_string()))
                .collect(),
            lowercase: names::LOWERCASE.iter().map(|path| path.to_string()).collect(),
            uppercase: names::UPPERCASE.iter().map(|path| path.to_string()).collect(),
            initialisms: initialisms::INITIALISMS
                .iter()
                .map(|(path, alternates)| {
                    let alternates = alternates.iter().map(|a| a.to_string()).collect();
                    (path.to_string(), alternates)
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KnownNames {
    specials: BTreeMap<Slug, SpecialName>,
    initialisms: BTreeMap<Slug, Vec<String>>,
    // lowercased display name -> smallest path
    display_index: BTreeMap<String, Slug>,
    // lowercased initialism -> sorted paths
    initialism_index: BTreeMap<String, Vec<Slug>>,
}

impl KnownNames {
    /// The built-in tables, built on first use and shared for the lifetime of
    /// the process.
    pub fn global() -> &'static KnownNames {
        static KNOWN_NAMES: OnceLock<KnownNames> = OnceLock::new();
        KNOWN_NAMES.get_or_init(|| {
            KnownNames::from_tables(&NameTables::builtin()).unwrap_or_else(|err| {
                tracing::error!("Failed to build the built-in name tables: {}", err);
                KnownNames::default()
            })
        })
    }

    /// Builds the lookup from raw tables. Lowercase and uppercase entries are
    /// applied after the styled names, so they win when a path is listed twice.
    ///
    /// # errors
    /// * `KnownNamesError::InvalidKey`: If a path is not a valid URL path.
    pub fn from_tables(tables: &NameTables) -> Result<Self, KnownNamesError> {
        let mut specials = BTreeMap::new();
        for (path, display) in &tables.names {
            let special = SpecialName {
                display: display.clone(),
                style: NameStyle::Styled,
            };
            specials.insert(parse_key(path)?, special);
        }
        for (style, paths) in [
            (NameStyle::Lowercase, &tables.lowercase),
            (NameStyle::Uppercase, &tables.uppercase),
        ] {
            for path in paths {
                let slug = parse_key(path)?;
                let display = style.render(&slug.humanize());
                specials.insert(slug, SpecialName { display, style });
            }
        }

        let mut initialisms = BTreeMap::new();
        for (path, alternates) in &tables.initialisms {
            initialisms.insert(parse_key(path)?, alternates.clone());
        }

        let mut display_index = BTreeMap::new();
        for (slug, special) in &specials {
            display_index
                .entry(special.display.to_lowercase())
                .or_insert_with(|| slug.clone());
        }

        let mut initialism_index: BTreeMap<String, Vec<Slug>> = BTreeMap::new();
        for (slug, alternates) in &initialisms {
            for alternate in alternates {
                let paths = initialism_index.entry(alternate.to_lowercase()).or_default();
                if !paths.contains(slug) {
                    paths.push(slug.clone());
                }
            }
        }

        tracing::debug!(
            specials = specials.len(),
            initialisms = initialisms.len(),
            "Built known name tables"
        );
        for style in NameStyle::iter() {
            tracing::debug!(
                "{} special names: {}",
                style,
                count_style(&specials, style)
            );
        }

        Ok(KnownNames {
            specials,
            initialisms,
            display_index,
            initialism_index,
        })
    }

    /// Parses a JSON document shaped like [`NameTables`].
    ///
    /// # errors
    /// * `KnownNamesError::Parse`: If the document is not valid JSON for the tables.
    /// * `KnownNamesError::InvalidKey`: If a path is not a valid URL path.
    pub fn from_json(json: &str) -> Result<Self, KnownNamesError> {
        let tables: NameTables =
            serde_json::from_str(json).map_err(|err| KnownNamesError::Parse(err.to_string()))?;
        Self::from_tables(&tables)
    }

    pub fn special_name(&self, path: &str) -> Option<&SpecialName> {
        self.specials.get(path)
    }

    /// All special names, ordered by path.
    pub fn specials(&self) -> impl Iterator<Item = (&Slug, &SpecialName)> {
        self.specials.iter()
    }

    /// All initialisms, ordered by path.
    pub fn all_initialisms(&self) -> impl Iterator<Item = (&Slug, &[String])> {
        self.initialisms
            .iter()
            .map(|(slug, alternates)| (slug, alternates.as_slice()))
    }
}

impl NameLookupOps for KnownNames {
    fn special(&self, path: &str) -> Option<&str> {
        self.specials
            .get(path)
            .map(|special| special.display.as_str())
    }

    fn find_special(&self, name: &str) -> Option<&str> {
        self.display_index
            .get(&name.to_lowercase())
            .map(Slug::as_str)
    }

    fn initialisms(&self, path: &str) -> &[String] {
        self.initialisms
            .get(path)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn match_initialism(&self, name: &str) -> Vec<&str> {
        self.initialism_index
            .get(&name.to_lowercase())
            .map(|paths| paths.iter().map(Slug::as_str).collect())
            .unwrap_or_default()
    }
}

fn count_style(specials: &BTreeMap<Slug, SpecialName>, style: NameStyle) -> usize {
    specials
        .values()
        .filter(|special| special.style == style)
        .count()
}

fn parse_key(path: &str) -> Result<Slug, KnownNamesError> {
    Slug::parse(path).map_err(|_| KnownNamesError::InvalidKey(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special() {
        let known = KnownNames::global();
        let test_cases = vec![
            ("acid-productions", Some("ACiD Productions")),
            ("coop", Some("TDT / TRSi")),
            ("surprise-productions", Some("Surprise! Productions")),
            ("defacto2net", Some("Defacto2 website")),
            ("scenet", Some("scenet")),
            ("mci-escapes", Some("mci escapes")),
            ("beer", Some("BEER")),
            ("2nd2none-bbs", Some("2ND2NONE BBS")),
            ("pe*trsi*tdt", Some("PE, TRSI, TDT")),
            ("tph-qqt-ftp", Some("TPH QQT FTP")),
            ("razor-1911", None),
            ("defacto2", None),
        ];
        for (path, expected) in test_cases {
            assert_eq!(known.special(path), expected, "special({path:?})");
        }
    }

    #[test]
    fn test_uppercase_overrides_styled_name() {
        let known = KnownNames::global();
        let core = known.special_name("core").unwrap();
        assert_eq!(core.display, "CORE");
        assert_eq!(core.style, NameStyle::Uppercase);
        assert_eq!(known.special("acronym"), Some("ACRONYM"));
    }

    #[test]
    fn test_count_style() {
        let tables = NameTables {
            names: BTreeMap::from([("core".to_string(), "Core".to_string())]),
            lowercase: vec!["scenet".to_string()],
            uppercase: vec!["core".to_string(), "beer".to_string()],
            ..NameTables::default()
        };
        let known = KnownNames::from_tables(&tables).unwrap();
        let counts: Vec<usize> = NameStyle::iter()
            .map(|style| count_style(&known.specials, style))
            .collect();
        assert_eq!(counts, vec![0, 1, 2]);
    }

    #[test]
    fn test_find_special() {
        let known = KnownNames::global();
        assert_eq!(known.find_special("tdt / trsi"), Some("coop"));
        assert_eq!(known.find_special("ACID PRODUCTIONS"), Some("acid-productions"));
        assert_eq!(
            known.find_special("United Software Association + Fairlight PC Division"),
            Some("united-software-association*fairlight")
        );
        assert_eq!(known.find_special("razor 1911"), None);
    }

    #[test]
    fn test_initialisms() {
        let known = KnownNames::global();
        assert_eq!(known.initialisms("union"), ["UNi"]);
        assert_eq!(known.initialisms("wave"), ["The Wave", "CNC"]);
        assert_eq!(known.initialisms("defacto2"), ["DF2"]);
        assert!(known.initialisms("").is_empty());
        assert!(known.initialisms("some-random-bbs").is_empty());
    }

    #[test]
    fn test_is_initialism() {
        let known = KnownNames::global();
        assert!(known.is_initialism("tristar"));
        assert!(known.is_initialism("tristar-ampersand-red-sector-inc"));
        assert!(!known.is_initialism(""));
        assert!(!known.is_initialism("some-random-bbs"));
    }

    #[test]
    fn test_join_initialisms() {
        let known = KnownNames::global();
        assert_eq!(known.join_initialisms("the-firm"), "FiRM, FRM");
        assert_eq!(
            known.join_initialisms("united-software-association*fairlight"),
            "USA/FLT"
        );
        assert_eq!(known.join_initialisms("razor-1911-cd-division"), "RazorCD");
        assert_eq!(known.join_initialisms("some-random-bbs"), "");
    }

    #[test]
    fn test_match_initialism() {
        let known = KnownNames::global();
        let test_cases: Vec<(&str, Vec<&str>)> = vec![
            ("", vec![]),
            ("some-unknown-random-bbs", vec![]),
            ("df2", vec!["defacto2"]),
            ("RzR", vec!["razor-1911", "razor-1911-demo", "razordox"]),
            ("tdt", vec!["the-dream-team"]),
            ("bad", vec!["bad-ass-dudes", "bitchin-ansi-design"]),
            ("fltdox", vec!["fairlight-dox"]),
        ];
        for (name, expected) in test_cases {
            assert_eq!(known.match_initialism(name), expected, "match_initialism({name:?})");
        }
    }

    #[test]
    fn test_initialisms_include_inc() {
        let known = KnownNames::global();
        let found = known
            .all_initialisms()
            .flat_map(|(_, alternates)| alternates.iter())
            .any(|alternate| alternate.to_lowercase() == "inc");
        assert!(found);
        assert!(known.all_initialisms().count() > 100);
    }

    #[test]
    fn test_from_tables_rejects_invalid_keys() {
        let mut tables = NameTables::default();
        tables
            .names
            .insert("ACiD Productions".to_string(), "ACiD Productions".to_string());
        assert_eq!(
            KnownNames::from_tables(&tables).unwrap_err(),
            KnownNamesError::InvalidKey("ACiD Productions".to_string())
        );

        let mut tables = NameTables::default();
        tables.uppercase.push("beer!".to_string());
        assert!(matches!(
            KnownNames::from_tables(&tables),
            Err(KnownNamesError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "names": { "acid-productions": "ACiD Productions" },
            "uppercase": ["beer"],
            "initialisms": { "the-firm": ["FiRM", "FRM"] }
        }"#;
        let known = KnownNames::from_json(json).unwrap();
        assert_eq!(known.special("acid-productions"), Some("ACiD Productions"));
        assert_eq!(known.special("beer"), Some("BEER"));
        assert_eq!(known.special("scenet"), None);
        assert_eq!(known.match_initialism("frm"), vec!["the-firm"]);
    }

    #[test]
    fn test_from_json_parse_error() {
        let result = KnownNames::from_json("{ \"names\": [] }");
        assert!(matches!(result, Err(KnownNamesError::Parse(_))));
    }
}
