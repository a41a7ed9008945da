//! Page decoration pipeline.
//!
//! Runs the six page transforms, once each, in a fixed order:
//!
//! ```text
//! disclaimer -> contents -> tables -> citations -> glossary -> crossref
//! ```
//!
//! Every transform tolerates a page lacking its markers. The first fault
//! (malformed cross-reference data) stops the run; the caller then keeps
//! the original page.

pub mod transform;

use crate::config::DecorConfig;
use crate::debug;
use crate::page::{DecorateError, Page, PageContext};

pub use transform::{
    CitationRewriter, ContentsBuilder, CrossRefResolver, DisclaimerInjector, GlossaryRewriter,
    TableStyler, Transform,
};

/// Chains transforms over one page and its context.
pub struct Pipeline<'a> {
    page: &'a Page,
    ctx: &'a PageContext,
}

impl<'a> Pipeline<'a> {
    pub const fn new(page: &'a Page, ctx: &'a PageContext) -> Self {
        Self { page, ctx }
    }

    /// Apply one transform, handing the pipeline back for the next.
    pub fn pipe<T: Transform>(self, transform: T) -> Result<Self, DecorateError> {
        debug!("decorate"; "running {}", transform.name());
        transform.apply(self.page, self.ctx)?;
        Ok(self)
    }
}

/// Decorate a parsed page in place.
pub fn decorate(page: &Page, ctx: &PageContext, config: &DecorConfig) -> Result<(), DecorateError> {
    Pipeline::new(page, ctx)
        .pipe(DisclaimerInjector::new(&config.disclaimer))?
        .pipe(ContentsBuilder::new(&config.toc))?
        .pipe(TableStyler::new(&config.tables))?
        .pipe(CitationRewriter)?
        .pipe(GlossaryRewriter)?
        .pipe(CrossRefResolver)?;
    Ok(())
}

/// Decorate an HTML document.
///
/// Returns `None` when the page does not include the invoking script node,
/// in which case it must be left as is.
pub fn decorate_html(html: &str, config: &DecorConfig) -> Result<Option<String>, DecorateError> {
    let page = Page::parse(html);
    let Some(ctx) = PageContext::locate(&page, &config.page.script)? else {
        return Ok(None);
    };

    decorate(&page, &ctx, config)?;
    Ok(Some(page.to_html()))
}
