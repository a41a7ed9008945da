//! Section heading scan over Markdown sources.

use std::sync::LazyLock;

use regex::Regex;

/// `## Title {#s:ident}` at the start of a line.
static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##[ \t]+.+[ \t]+\{#(s:.+)\}").unwrap());

/// Section ids in source order.
pub fn section_ids(markdown: &str) -> Vec<&str> {
    SECTION_HEADING
        .captures_iter(markdown)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
