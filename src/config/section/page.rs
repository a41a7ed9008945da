//! Page decorator sections: `[page]`, `[disclaimer]`, `[toc]`, `[tables]`.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::page::dom::is_valid_selector;

/// Notice shown in the disclaimer container.
pub const DEFAULT_NOTICE: &str = "<p>These notes are in the early stages of development. \
Recycled material that has not been edited is shown with a twilight blue background; \
everything in white has had a first pass, but needs at least one more.</p>";

/// `[page]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Selector of the invoking script node carrying `ROOT` and `CROSSREF`.
    pub script: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            script: "script[crossref]".to_string(),
        }
    }
}

/// `[disclaimer]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclaimerConfig {
    pub selector: String,
    /// Markup replacing the container's content.
    pub notice: String,
}

impl Default for DisclaimerConfig {
    fn default() -> Self {
        Self {
            selector: "div.disclaimer".to_string(),
            notice: DEFAULT_NOTICE.to_string(),
        }
    }
}

/// List element used for the table of contents.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// `<ol>` (default).
    #[default]
    Ol,
    /// `<ul>`.
    Ul,
}

impl ListKind {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ol => "ol",
            Self::Ul => "ul",
        }
    }
}

/// `[toc]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Headings container.
    pub selector: String,
    /// Id prefix marking an `h2` as a section heading.
    pub prefix: String,
    pub title: String,
    pub list: ListKind,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            selector: "div.headings".to_string(),
            prefix: "s:".to_string(),
            title: "Contents".to_string(),
            list: ListKind::Ol,
        }
    }
}

/// `[tables]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    /// Classes added to every table.
    pub classes: Vec<String>,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            classes: vec!["table".to_string(), "table-striped".to_string()],
        }
    }
}

impl PageConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_selector("page.script", &self.script, diag);
    }
}

impl DisclaimerConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_selector("disclaimer.selector", &self.selector, diag);
    }
}

impl TocConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_selector("toc.selector", &self.selector, diag);
    }
}

impl TablesConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self
            .classes
            .iter()
            .any(|class| class.is_empty() || class.contains(char::is_whitespace))
        {
            diag.error("tables.classes", "class names must be non-empty and contain no whitespace");
        }
    }
}

fn check_selector(field: &'static str, selector: &str, diag: &mut ConfigDiagnostics) {
    if !is_valid_selector(selector) {
        diag.error_with_hint(
            field,
            format!("invalid selector `{selector}`"),
            "use a CSS selector such as `div.headings`",
        );
    }
}
