use core_types::slug::{decode, encode, valid};
use known_names::{KnownNames, NameLookupOps};

use crate::name_normalizer::{
    FormatOptions, NameNormalizer,
    rules::{
        articles::trim_the,
        chars::{collapse_spaces, strip_chars, strip_leading},
    },
};

/// Cleans, formats and converts releaser names and their URL paths.
///
/// The lookup table is borrowed, so any [`NameLookupOps`] implementation can
/// be injected. [`Releaser::default`] uses the built-in [`KnownNames`].
pub struct Releaser<'a, L: NameLookupOps + ?Sized = KnownNames> {
    lookup: &'a L,
    options: FormatOptions,
}

impl Default for Releaser<'static, KnownNames> {
    fn default() -> Self {
        Releaser::new(KnownNames::global())
    }
}

impl<'a, L: NameLookupOps + ?Sized> Releaser<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Releaser {
            lookup,
            options: FormatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Fixes a malformed name for display. Incompatible characters and
    /// excess whitespace are removed, and the "The" prefix is dropped from
    /// BBS and FTP site names.
    ///
    /// Example:
    ///
    /// ```
    /// let releaser: releaser::Releaser = releaser::Releaser::default();
    /// assert_eq!(releaser.clean("  Defacto2  demo  group."), "Defacto2 Demo Group");
    /// assert_eq!(releaser.clean("The X Ftp"), "X FTP");
    /// ```
    pub fn clean(&self, name: &str) -> String {
        let name = prefilter(name);
        self.normalizer().format(&trim_the(&name))
    }

    /// Fixes a malformed name for use as a database cell or index key.
    /// Special names are not substituted and the result is uppercase.
    pub fn cell(&self, name: &str) -> String {
        let name = prefilter(name);
        self.normalizer().cell(&name)
    }

    /// Deobfuscates the URL path into a formatted, human-readable name.
    /// Returns an empty string if the path contains invalid characters.
    pub fn humanize(&self, path: &str) -> String {
        let path = path.to_lowercase();
        if let Some(special) = self.lookup.special(&path) {
            return special.to_string();
        }
        match decode(&path) {
            Ok(name) => self.clean(&name),
            Err(err) => {
                tracing::debug!("Failed to humanize path: {}", err);
                String::new()
            }
        }
    }

    /// The uppercase name of the path, without special name formatting.
    /// Returns an empty string if the path contains invalid characters.
    pub fn index(&self, path: &str) -> String {
        match decode(&path.to_lowercase()) {
            Ok(name) => name.to_uppercase(),
            Err(err) => {
                tracing::debug!("Failed to index path: {}", err);
                String::new()
            }
        }
    }

    /// Like [`Releaser::humanize`] but groups are joined with " + " for use
    /// as a link description.
    pub fn link(&self, path: &str) -> String {
        self.humanize(path).replace(", ", " + ")
    }

    /// Formats the name as a URL path. Known special names and initialisms
    /// resolve to their path.
    ///
    /// Example:
    ///
    /// ```
    /// let releaser: releaser::Releaser = releaser::Releaser::default();
    /// assert_eq!(releaser.obfuscate("ACiD Productions"), "acid-productions");
    /// assert_eq!(releaser.obfuscate("TDU-Jam!"), "tdu_jam");
    /// assert_eq!(releaser.obfuscate("TDT"), "the-dream-team");
    /// ```
    pub fn obfuscate(&self, name: &str) -> String {
        match self.known_path(name) {
            Some(path) => path,
            None => encode(&self.clean(name)),
        }
    }

    /// The display name of a free text name, resolving known special names
    /// and initialisms first.
    pub fn title(&self, name: &str) -> String {
        match self.known_path(name) {
            Some(path) => self.humanize(&path),
            None => self.humanize(&self.obfuscate(name)),
        }
    }

    pub fn valid(&self, path: &str) -> bool {
        valid(path)
    }

    /// Finds the path of a name that is already a special path, the display
    /// form of a special name or an initialism. Ambiguous initialisms resolve
    /// to the lexicographically smallest path.
    fn known_path(&self, name: &str) -> Option<String> {
        let path = encode(name);
        if self.lookup.special(&path).is_some() {
            return Some(path);
        }
        let name = name.trim();
        if let Some(path) = self.lookup.find_special(name) {
            return Some(path.to_string());
        }
        let paths = self.lookup.match_initialism(name);
        if paths.len() > 1 {
            tracing::debug!(name, ?paths, "Ambiguous initialism");
        }
        paths.first().map(|path| path.to_string())
    }

    fn normalizer(&self) -> NameNormalizer<'_, L> {
        NameNormalizer::new(self.lookup, &self.options)
    }
}

fn prefilter(name: &str) -> String {
    let name = collapse_spaces(&strip_chars(name));
    strip_leading(&name).trim().to_string()
}
