//! Cleaning and formatting of scene releaser names and their URL paths.
//!
//! The free functions use the built-in name tables. Build a [`Releaser`]
//! to inject other tables or [`FormatOptions`].

use std::sync::OnceLock;

mod facade;
pub mod name_normalizer;

pub use core_types::slug::valid;
pub use facade::Releaser;
pub use known_names::{KnownNames, NameLookupOps};
pub use name_normalizer::{FormatOptions, NameNormalizer, WordPosition};

fn releaser() -> &'static Releaser<'static> {
    static RELEASER: OnceLock<Releaser<'static>> = OnceLock::new();
    RELEASER.get_or_init(Releaser::default)
}

/// Formats the name to be used as a cell in a database table.
///
/// Example:
///
/// ```
/// assert_eq!(releaser::cell("  Defacto2  demo  group."), "DEFACTO2 DEMO GROUP");
/// assert_eq!(releaser::cell("the x bbs"), "X BBS");
/// assert_eq!(releaser::cell("defacto2.net"), "DEFACTO2NET");
/// ```
pub fn cell(name: &str) -> String {
    releaser().cell(name)
}

/// Fixes the malformed name for display.
///
/// Example:
///
/// ```
/// assert_eq!(releaser::clean("  Defacto2  demo  group."), "Defacto2 Demo Group");
/// assert_eq!(releaser::clean("the x bbs"), "X BBS");
/// ```
pub fn clean(name: &str) -> String {
    releaser().clean(name)
}

/// Deobfuscates the URL path and returns the formatted, human-readable name.
/// Invalid paths return an empty string.
///
/// Example:
///
/// ```
/// assert_eq!(releaser::humanize("razor-1911-demo*trsi"), "Razor 1911 Demo, TRSi");
/// assert_eq!(releaser::humanize("razor-1911-demo#trsi"), "");
/// ```
pub fn humanize(path: &str) -> String {
    releaser().humanize(path)
}

/// The uppercase name of the URL path, used as a stable index key.
pub fn index(path: &str) -> String {
    releaser().index(path)
}

/// Like [`humanize`] but groups are joined with " + " for use as a link description.
///
/// Example:
///
/// ```
/// assert_eq!(releaser::link("class*paradigm*razor-1911-demo"), "Class + Paradigm + Razor 1911 Demo");
/// ```
pub fn link(path: &str) -> String {
    releaser().link(path)
}

/// Formats the name to be used as a URL path.
///
/// Example:
///
/// ```
/// assert_eq!(releaser::obfuscate("Razor 1911 Demo & Skillion"), "razor-1911-demo-ampersand-skillion");
/// ```
pub fn obfuscate(name: &str) -> String {
    releaser().obfuscate(name)
}

/// The display name of a free text name, resolving known special names and
/// initialisms first.
///
/// Example:
///
/// ```
/// assert_eq!(releaser::title("tdt / trsi"), "TDT / TRSi");
/// assert_eq!(releaser::title(" _.=[   RaZoR 1911   ]=._ "), "Razor 1911");
/// ```
pub fn title(name: &str) -> String {
    releaser().title(name)
}
