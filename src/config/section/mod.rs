//! Configuration section definitions.
//!
//! Each module corresponds to sections in `decor.toml`:
//!
//! | Module     | TOML Section                                   | Purpose                        |
//! |------------|------------------------------------------------|--------------------------------|
//! | `page`     | `[page]` `[disclaimer]` `[toc]` `[tables]`     | Page decorator markers         |
//! | `crossref` | `[crossref]`                                   | Cross-reference table sources  |

mod crossref;
mod page;

pub use crossref::CrossRefConfig;
pub use page::{DisclaimerConfig, ListKind, PageConfig, TablesConfig, TocConfig};
