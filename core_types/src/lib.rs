use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;

pub mod slug;

pub use slug::Slug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreTypeError {
    #[error("the path contains invalid characters: {0:?}")]
    InvalidPath(String),
}

/// How the display form of a known releaser is written.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display, Serialize, Deserialize,
)]
pub enum NameStyle {
    /// Irregular mixed casing or symbols, stored verbatim.
    Styled,
    #[strum(serialize = "all lowercase")]
    Lowercase,
    #[strum(serialize = "all uppercase")]
    Uppercase,
}

impl NameStyle {
    /// Renders a humanized path in this style. `Styled` names have no rule to
    /// apply, so the input is returned as is.
    pub fn render(&self, humanized: &str) -> String {
        match self {
            NameStyle::Styled => humanized.to_string(),
            NameStyle::Lowercase => humanized.to_lowercase(),
            NameStyle::Uppercase => humanized.to_uppercase(),
        }
    }
}
