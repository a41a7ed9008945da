//! Page decoration error types.

use thiserror::Error;

/// Faults raised while decorating a page.
///
/// Missing containers, headings or links are never errors; only malformed
/// upstream data stops a decoration run.
#[derive(Debug, Error)]
pub enum DecorateError {
    #[error("malformed cross-reference table")]
    MalformedCrossRef(#[source] serde_json::Error),

    #[error("cross-reference `{key}` not found in table")]
    UnknownCrossRef { key: String },

    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
}
