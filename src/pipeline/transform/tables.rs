//! Table styling pass.

use super::Transform;
use crate::config::TablesConfig;
use crate::page::dom;
use crate::page::{DecorateError, Page, PageContext};

/// Adds the configured (striped table) classes to every table.
pub struct TableStyler<'a> {
    config: &'a TablesConfig,
}

impl<'a> TableStyler<'a> {
    pub const fn new(config: &'a TablesConfig) -> Self {
        Self { config }
    }
}

impl Transform for TableStyler<'_> {
    fn name(&self) -> &'static str {
        "tables"
    }

    fn apply(&self, page: &Page, _ctx: &PageContext) -> Result<(), DecorateError> {
        for table in dom::select_all(page.document(), "table")? {
            dom::add_classes(&table, self.config.classes.iter().map(String::as_str));
        }
        Ok(())
    }
}
