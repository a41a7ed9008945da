//! Cross-reference link rewriter.
//!
//! `<a href="#REF">s:intro</a>` is resolved through the page's
//! cross-reference table into `<a href="../intro/#s:intro">Chapter&nbsp;1</a>`.

use super::{Transform, links_where};
use crate::page::dom;
use crate::page::{DecorateError, Page, PageContext};

/// Sentinel target marking a cross-reference; the link text is the key.
pub const REF_SENTINEL: &str = "#REF";

pub struct CrossRefResolver;

impl Transform for CrossRefResolver {
    fn name(&self) -> &'static str {
        "crossref"
    }

    fn apply(&self, page: &Page, ctx: &PageContext) -> Result<(), DecorateError> {
        for (link, _) in links_where(page, |href| href == REF_SENTINEL)? {
            let key = link.as_node().text_contents();
            let entry = ctx.crossref.lookup(&key)?;

            let target = format!("{}/{}/#{}", ctx.site_prefix(), entry.slug, key);
            dom::set_attr(&link, "href", target);
            dom::set_inner_html(
                link.as_node(),
                &format!("{}&nbsp;{}", entry.text, entry.value),
            );
        }
        Ok(())
    }
}
