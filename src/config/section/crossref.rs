//! `[crossref]` section: sources for the generated cross-reference table.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Appendices are lettered `A` to `Z`.
pub const MAX_EXTRAS: usize = 26;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossRefConfig {
    /// Directory holding `<slug>.md` sources.
    pub source: PathBuf,
    /// Chapter slugs, numbered from 1.
    pub lessons: Vec<String>,
    /// Appendix slugs, lettered from A.
    pub extras: Vec<String>,
}

impl Default for CrossRefConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            lessons: Vec::new(),
            extras: Vec::new(),
        }
    }
}

impl CrossRefConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extras.len() > MAX_EXTRAS {
            diag.error(
                "crossref.extras",
                format!("at most {MAX_EXTRAS} appendices, found {}", self.extras.len()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.crossref.source, PathBuf::from("."));
        assert!(config.crossref.lessons.is_empty());
        assert!(config.crossref.extras.is_empty());
    }

    #[test]
    fn test_parse_slugs() {
        let config = test_parse_config(
            "[crossref]\nsource = \"_en\"\nlessons = [\"intro\", \"basics\"]\nextras = [\"glossary\"]",
        );
        assert_eq!(config.crossref.source, PathBuf::from("_en"));
        assert_eq!(config.crossref.lessons, ["intro", "basics"]);
        assert_eq!(config.crossref.extras, ["glossary"]);
    }

    #[test]
    fn test_too_many_extras() {
        let mut config = CrossRefConfig::default();
        config.extras = (0..27).map(|i| format!("x{i}")).collect();
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
