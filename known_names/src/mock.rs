use std::collections::HashMap;

use crate::NameLookupOps;

/// Hand filled lookup for tests that should not depend on the built-in tables.
#[derive(Debug, Clone, Default)]
pub struct MockNameLookup {
    specials: HashMap<String, String>,
    initialisms: HashMap<String, Vec<String>>,
}

impl MockNameLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_special(mut self, path: &str, display: &str) -> Self {
        self.specials.insert(path.to_string(), display.to_string());
        self
    }

    pub fn with_initialisms(mut self, path: &str, alternates: &[&str]) -> Self {
        let alternates = alternates.iter().map(|a| a.to_string()).collect();
        self.initialisms.insert(path.to_string(), alternates);
        self
    }
}

impl NameLookupOps for MockNameLookup {
    fn special(&self, path: &str) -> Option<&str> {
        self.specials.get(path).map(String::as_str)
    }

    fn find_special(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.specials
            .iter()
            .filter(|(_, display)| display.to_lowercase() == name)
            .map(|(path, _)| path.as_str())
            .min()
    }

    fn initialisms(&self, path: &str) -> &[String] {
        self.initialisms
            .get(path)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn match_initialism(&self, name: &str) -> Vec<&str> {
        let name = name.to_lowercase();
        let mut paths: Vec<&str> = self
            .initialisms
            .iter()
            .filter(|(_, alternates)| alternates.iter().any(|a| a.to_lowercase() == name))
            .map(|(path, _)| path.as_str())
            .collect();
        paths.sort_unstable();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_lookup() {
        let lookup = MockNameLookup::new()
            .with_special("zz-top", "ZZ Top")
            .with_special("aa-top", "zz top")
            .with_initialisms("zeta", &["ZT"])
            .with_initialisms("alpha", &["zt", "A"]);

        assert_eq!(lookup.special("zz-top"), Some("ZZ Top"));
        assert_eq!(lookup.find_special("ZZ TOP"), Some("aa-top"));
        assert_eq!(lookup.match_initialism("Zt"), vec!["alpha", "zeta"]);
        assert!(lookup.is_initialism("alpha"));
        assert_eq!(lookup.join_initialisms("alpha"), "zt, A");
        assert!(lookup.initialisms("beta").is_empty());
    }
}
