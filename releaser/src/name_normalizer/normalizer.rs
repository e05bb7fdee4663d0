use core_types::slug::encode;
use known_names::NameLookupOps;
use serde::Deserialize;

use crate::name_normalizer::{
    case::{WordPosition, classify, classify_compound},
    rules::{ampersand::amp, articles::trim_the, dots::trim_trailing_dot},
};

/// Options for splitting and joining multi-group names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Separates the groups of a collaboration, e.g. "Class,Paradigm".
    pub group_separator: char,
    /// Joins the formatted groups back together.
    pub group_joiner: String,
    /// Names of up to this many characters are uppercased wholesale.
    pub acronym_length: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            group_separator: ',',
            group_joiner: ", ".to_string(),
            acronym_length: 3,
        }
    }
}

pub struct NameNormalizer<'a, L: NameLookupOps + ?Sized> {
    lookup: &'a L,
    options: &'a FormatOptions,
}

impl<'a, L: NameLookupOps + ?Sized> NameNormalizer<'a, L> {
    pub fn new(lookup: &'a L, options: &'a FormatOptions) -> Self {
        NameNormalizer { lookup, options }
    }

    /// Formats the name into display casing.
    ///
    /// Each group is looked up as a special name first, and only falls back to
    /// the word casing rules when there is no match.
    pub fn format(&self, text: &str) -> String {
        if self.is_acronym(text) {
            return text.to_uppercase();
        }
        let groups: Vec<String> = self
            .groups(text)
            .map(|group| match self.lookup.special(&encode(&group)) {
                Some(special) => {
                    tracing::trace!(group = %group, special, "Substituted special name");
                    special.to_string()
                }
                None => format_words(&group),
            })
            .collect();
        groups.join(&self.options.group_joiner)
    }

    /// Formats the name as an uppercase key for storage and indexing.
    /// Special names are not substituted.
    pub fn cell(&self, text: &str) -> String {
        let text = trim_the(text.trim());
        if self.is_acronym(&text) {
            return text.to_uppercase();
        }
        let groups: Vec<String> = self.groups(&text).map(|g| format_words(&g)).collect();
        groups.join(&self.options.group_joiner).to_uppercase()
    }

    fn is_acronym(&self, text: &str) -> bool {
        text.chars().count() <= self.options.acronym_length
    }

    fn groups(&self, text: &str) -> impl Iterator<Item = String> {
        text.split(self.options.group_separator)
            .map(|group| amp(&group.trim().to_lowercase()).trim().to_string())
            .filter(|group| !group.is_empty())
    }
}

fn format_words(group: &str) -> String {
    let words: Vec<&str> = group.split(' ').collect();
    let last = words.len() - 1;
    let fixed: Vec<String> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let word = trim_trailing_dot(word);
            classify_compound(word).unwrap_or_else(|| classify(word, WordPosition::new(i, last)))
        })
        .collect();
    fixed.join(" ")
}

#[cfg(test)]
mod tests {
    use known_names::{KnownNames, mock::MockNameLookup};

    use super::*;

    #[test]
    fn test_format() {
        let options = FormatOptions::default();
        let normalizer = NameNormalizer::new(KnownNames::global(), &options);
        let test_cases = vec![
            ("", ""),
            ("abc", "ABC"),
            ("beer", "BEER"),
            ("SceNET", "scenet"),
            ("hashx", "Hash X"),
            ("Excretion anarchy", "eXCReTION"),
            ("Anz ftp", "ANZ FTP"),
            ("pcb", "PCB"),
            ("7Of9", "7of9"),
            ("the 12am group", "The 12AM Group"),
            ("thedox group", "TheDox Group"),
            ("the lsdgroup", "The LSDGroup"),
            ("inc group", "INC Group"),
            ("pc-group", "PC-Group"),
            ("hello.", "Hello"),
            ("hello..", "Hello."),
            ("razor 1911,trsi", "Razor 1911, TRSi"),
            ("hello&&world", "Hello & World"),
            ("class,,paradigm", "Class, Paradigm"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(normalizer.format(input), expected, "format({input:?})");
        }
    }

    #[test]
    fn test_cell() {
        let options = FormatOptions::default();
        let normalizer = NameNormalizer::new(KnownNames::global(), &options);
        let test_cases = vec![
            ("", ""),
            ("SceNET", "SCENET"),
            ("pc-group", "PC-GROUP"),
            ("hello.", "HELLO"),
            ("coop", "COOP"),
            ("2000 ad", "2000 AD"),
            ("the x bbs", "X BBS"),
            ("the 12am group", "THE 12AM GROUP"),
            ("tdt,trsi", "TDT, TRSI"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(normalizer.cell(input), expected, "cell({input:?})");
        }
    }

    #[test]
    fn test_format_with_mock_lookup() {
        let lookup = MockNameLookup::new().with_special("some-group", "sOmE GrOuP");
        let options = FormatOptions::default();
        let normalizer = NameNormalizer::new(&lookup, &options);

        assert_eq!(normalizer.format("SOME GROUP"), "sOmE GrOuP");
        assert_eq!(
            normalizer.format("some group, other group"),
            "sOmE GrOuP, Other Group"
        );
        // the built-in specials are not consulted
        assert_eq!(normalizer.format("scenet"), "Scenet");
        assert_eq!(normalizer.cell("some group"), "SOME GROUP");
    }

    #[test]
    fn test_format_options() {
        let lookup = MockNameLookup::new();
        let options = FormatOptions {
            group_separator: '/',
            group_joiner: " + ".to_string(),
            acronym_length: 4,
        };
        let normalizer = NameNormalizer::new(&lookup, &options);

        assert_eq!(normalizer.format("beer"), "BEER");
        assert_eq!(normalizer.format("class/paradigm"), "Class + Paradigm");
        assert_eq!(normalizer.format("razor, 1911"), "Razor, 1911");
    }

    #[test]
    fn test_format_options_deserialize() {
        let options: FormatOptions = serde_json::from_str(r#"{ "group_joiner": " + " }"#).unwrap();
        assert_eq!(options.group_separator, ',');
        assert_eq!(options.group_joiner, " + ");
        assert_eq!(options.acronym_length, 3);
    }
}
