//! Disclaimer injector.

use super::Transform;
use crate::config::DisclaimerConfig;
use crate::page::dom;
use crate::page::{DecorateError, Page, PageContext};

/// Replaces the disclaimer container's content with the configured notice.
pub struct DisclaimerInjector<'a> {
    config: &'a DisclaimerConfig,
}

impl<'a> DisclaimerInjector<'a> {
    pub const fn new(config: &'a DisclaimerConfig) -> Self {
        Self { config }
    }
}

impl Transform for DisclaimerInjector<'_> {
    fn name(&self) -> &'static str {
        "disclaimer"
    }

    fn apply(&self, page: &Page, _ctx: &PageContext) -> Result<(), DecorateError> {
        if let Some(container) = dom::select_first(page.document(), &self.config.selector)? {
            dom::set_inner_html(container.as_node(), &self.config.notice);
        }
        Ok(())
    }
}
