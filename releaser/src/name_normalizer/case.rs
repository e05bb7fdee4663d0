/// Connecting words that stay lowercase unless they start or end the name.
const STOP_WORDS: &[&str] = &[
    "a", "as", "and", "at", "by", "el", "of", "for", "from", "in", "is", "or", "tha", "the", "to",
    "with",
];

const ORDINALS: &[&str] = &[
    "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th", "11th", "12th", "13th",
];

/// Known acronyms, initialisms and abbreviations that are always uppercased.
const ACRONYMS: &[&str] = &[
    "3d", "abc", "acdc", "ad", "am", "amf", "ansi", "asm", "au", "bbc", "bbs", "bc", "cd", "cgi",
    "diz", "dox", "eu", "faq", "fbi", "fm", "ftp", "fr", "fx", "fxp", "gbc", "gif", "hq", "id",
    "ii", "iii", "iso", "kgb", "mp3", "pc", "pcb", "pcp", "pda", "pm", "psx", "pwa", "rom", "rpm",
    "ssd", "st", "tnt", "tsr", "ufo", "uk", "us", "usa", "uss", "ussr", "vcd", "whq", "xxx",
];

/// Suffixes that are uppercased when they follow a number, e.g. "12am" -> "12AM".
const NUMERIC_SUFFIXES: &[(&str, &str)] = &[("ad", "AD"), ("bc", "BC"), ("am", "AM"), ("pm", "PM")];

const WORD_SUFFIXES: &[(&str, &str)] = &[
    ("dox", "Dox"),
    ("fxp", "FXP"),
    ("iso", "ISO"),
    ("nfo", "NFO"),
];

const WORD_PREFIXES: &[(&str, &str)] = &[("pc-", "PC-"), ("lsd", "LSD")];

/// Position of a word within the list of words it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPosition {
    pub index: usize,
    pub last: usize,
}

impl WordPosition {
    pub fn new(index: usize, last: usize) -> Self {
        WordPosition { index, last }
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.last
    }
}

/// Returns the display form of a single word based on its position.
///
/// The rules are tried in order and the first match wins: connecting words,
/// abbreviations, prefixes and suffixes, first word sequences and finally
/// title casing.
pub fn classify(word: &str, position: WordPosition) -> String {
    connecting_word(word, position)
        .or_else(|| abbreviation(word))
        .or_else(|| affix(word))
        .or_else(|| sequence(word, position))
        .unwrap_or_else(|| title_case_word(word))
}

/// Applies [`classify`] to every part of a hyphenated word, with positions
/// relative to the compound. Returns `None` for words without a hyphen.
pub fn classify_compound(word: &str) -> Option<String> {
    if !word.contains('-') {
        return None;
    }
    let parts: Vec<&str> = word.split('-').collect();
    let last = parts.len() - 1;
    let fixed: Vec<String> = parts
        .iter()
        .enumerate()
        .map(|(i, part)| classify(part, WordPosition::new(i, last)))
        .collect();
    Some(fixed.join("-"))
}

fn connecting_word(word: &str, position: WordPosition) -> Option<String> {
    if position.is_first() || position.is_last() {
        return None;
    }
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str()).then_some(lower)
}

fn abbreviation(word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    if ORDINALS.contains(&lower.as_str()) || lower == "7of9" {
        return Some(lower);
    }
    ACRONYMS
        .contains(&lower.as_str())
        .then(|| word.to_uppercase())
}

fn affix(word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    // a matching numeric suffix ends the search, even when its prefix is not a number
    for (suffix, upper) in NUMERIC_SUFFIXES {
        if let Some(prefix) = lower.strip_suffix(suffix) {
            let number = prefix.parse::<i64>().ok()?;
            return Some(format!("{number}{upper}"));
        }
    }
    for (suffix, styled) in WORD_SUFFIXES {
        if let Some(prefix) = lower.strip_suffix(suffix) {
            return Some(format!("{}{styled}", title_case_word(prefix)));
        }
    }
    for (prefix, styled) in WORD_PREFIXES {
        if let Some(rest) = lower.strip_prefix(prefix) {
            return Some(format!("{styled}{}", title_case_word(rest)));
        }
    }
    None
}

fn sequence(word: &str, position: WordPosition) -> Option<String> {
    // short names are uppercased wholesale before any word rules run,
    // so "inc" only reaches here as the first word of a longer name
    (position.is_first() && word.eq_ignore_ascii_case("inc")).then(|| word.to_uppercase())
}

/// Uppercases the first letter and lowercases the rest, e.g. "2tally" -> "2Tally".
pub fn title_case_word(word: &str) -> String {
    let lower = word.to_lowercase();
    match lower.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((i, c)) => {
            let mut titled = String::with_capacity(lower.len());
            titled.push_str(&lower[..i]);
            titled.extend(c.to_uppercase());
            titled.push_str(&lower[i + c.len_utf8()..]);
            titled
        }
        None => lower,
    }
}
