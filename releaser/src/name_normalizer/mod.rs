mod case;
mod normalizer;
pub mod rules;

pub use case::{WordPosition, classify, classify_compound, title_case_word};
pub use normalizer::{FormatOptions, NameNormalizer};
