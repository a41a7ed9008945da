//! Page transforms.
//!
//! Each transform is a single pass over the live page tree.
//!
//! # Modules
//!
//! - `disclaimer`: Replaces the disclaimer container's content with the notice
//! - `contents`: Builds the table of contents from section headings, or drops it
//! - `tables`: Adds style classes to every table
//! - `citation`: Expands `#BIB` links into bracketed bibliography links
//! - `glossary`: Points `#g:` links at the glossary page
//! - `crossref`: Resolves `#REF` links through the cross-reference table

mod citation;
mod contents;
mod crossref;
mod disclaimer;
mod glossary;
mod tables;

pub use citation::{BIB_SENTINEL, CitationRewriter};
pub use contents::ContentsBuilder;
pub use crossref::{CrossRefResolver, REF_SENTINEL};
pub use disclaimer::DisclaimerInjector;
pub use glossary::{GLOSSARY_PREFIX, GlossaryRewriter};
pub use tables::TableStyler;

use crate::page::dom::{self, Element};
use crate::page::{DecorateError, Page, PageContext};

/// One decoration step over a page.
pub trait Transform {
    /// Short name used in debug output.
    fn name(&self) -> &'static str;

    fn apply(&self, page: &Page, ctx: &PageContext) -> Result<(), DecorateError>;
}

/// Links whose `href` satisfies `pred`, in document order.
///
/// Links without an `href` never match.
fn links_where(
    page: &Page,
    pred: impl Fn(&str) -> bool,
) -> Result<Vec<(Element, String)>, DecorateError> {
    Ok(dom::select_all(page.document(), "a[href]")?
        .into_iter()
        .filter_map(|link| {
            let href = dom::attr(&link, "href")?;
            pred(&href).then_some((link, href))
        })
        .collect())
}
