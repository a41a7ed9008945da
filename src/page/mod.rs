//! Rendered pages and the data their invoking script node carries.
//!
//! A page is decorated only if it includes the decorator script; the
//! script element's `ROOT` and `CROSSREF` attributes become a
//! [`PageContext`] for the run.

mod crossref;
pub mod dom;
mod error;

pub use crossref::{CrossRefEntry, CrossRefTable};
pub use error::DecorateError;

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

/// Root-flag attribute (HTML attribute names are lowercased on parse).
pub const ROOT_ATTR: &str = "root";
/// Cross-reference table attribute.
pub const CROSSREF_ATTR: &str = "crossref";

/// A parsed page, mutated in place by the decorator.
pub struct Page {
    document: NodeRef,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: kuchiki::parse_html().one(html),
        }
    }

    pub fn document(&self) -> &NodeRef {
        &self.document
    }

    /// Serialize the (possibly mutated) tree back to HTML.
    pub fn to_html(&self) -> String {
        self.document.to_string()
    }
}

/// Per-page data read from the invoking script node.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Page sits at the site root (`./` links) rather than one level down (`../`).
    pub is_root: bool,
    pub crossref: CrossRefTable,
}

impl PageContext {
    /// Build the context from the first element matching `script_selector`.
    ///
    /// Returns `None` when the page does not include the script.
    pub fn locate(page: &Page, script_selector: &str) -> Result<Option<Self>, DecorateError> {
        let Some(script) = dom::select_first(page.document(), script_selector)? else {
            return Ok(None);
        };

        // An absent ROOT attribute is not the empty string, so it counts as root
        let is_root = dom::attr(&script, ROOT_ATTR).is_none_or(|root| !root.is_empty());

        let crossref = match dom::attr(&script, CROSSREF_ATTR) {
            Some(json) => CrossRefTable::from_json(&json)?,
            None => CrossRefTable::default(),
        };

        Ok(Some(Self { is_root, crossref }))
    }

    /// Path prefix for links relative to the site root: `.` or `..`.
    pub const fn site_prefix(&self) -> &'static str {
        if self.is_root { "." } else { ".." }
    }
}

/// Parse a test page whose `<body>` is `body`.
#[cfg(test)]
pub fn test_page(body: &str) -> Page {
    Page::parse(&format!("<!DOCTYPE html><html><head></head><body>{body}</body></html>"))
}

/// Build a context without going through a script node.
#[cfg(test)]
pub fn test_context(is_root: bool, crossref_json: &str) -> PageContext {
    PageContext {
        is_root,
        crossref: CrossRefTable::from_json(crossref_json).unwrap(),
    }
}
