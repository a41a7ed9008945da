//! Glossary link rewriter.

use super::{Transform, links_where};
use crate::page::dom;
use crate::page::{DecorateError, Page, PageContext};

/// Target prefix of glossary term links.
pub const GLOSSARY_PREFIX: &str = "#g:";

/// Points `#g:term` links at the glossary page and tags them `gloss`.
///
/// Link content is left as is.
pub struct GlossaryRewriter;

impl Transform for GlossaryRewriter {
    fn name(&self) -> &'static str {
        "glossary"
    }

    fn apply(&self, page: &Page, ctx: &PageContext) -> Result<(), DecorateError> {
        let stem = if ctx.is_root { "./gloss/" } else { "../gloss/" };
        for (link, href) in links_where(page, |href| href.starts_with(GLOSSARY_PREFIX))? {
            dom::set_attr(&link, "href", format!("{stem}{href}"));
            dom::add_classes(&link, ["gloss"]);
        }
        Ok(())
    }
}
