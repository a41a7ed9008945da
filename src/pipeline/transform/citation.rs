//! Bibliography link rewriter.
//!
//! `<a href="#BIB">key1,key2</a>` becomes
//! `<span>[<a href=".../bib/#b:/key1" class="citation">key1</a>,...]</span>`.

use kuchiki::NodeRef;

use super::{Transform, links_where};
use crate::page::dom;
use crate::page::{DecorateError, Page, PageContext};

/// Sentinel target marking a citation list.
pub const BIB_SENTINEL: &str = "#BIB";

pub struct CitationRewriter;

impl CitationRewriter {
    const fn stem(ctx: &PageContext) -> &'static str {
        if ctx.is_root { "./bib/#b:" } else { "../bib/#b:" }
    }
}

impl Transform for CitationRewriter {
    fn name(&self) -> &'static str {
        "citations"
    }

    fn apply(&self, page: &Page, ctx: &PageContext) -> Result<(), DecorateError> {
        let stem = Self::stem(ctx);
        for (link, _) in links_where(page, |href| href == BIB_SENTINEL)? {
            let text = link.as_node().text_contents();
            let span = citation_span(stem, &citation_keys(&text));

            let node = link.as_node();
            node.insert_before(span);
            node.detach();
        }
        Ok(())
    }
}

/// Comma-separated keys, empty entries dropped. Keys are not trimmed.
fn citation_keys(text: &str) -> Vec<&str> {
    text.split(',').filter(|key| !key.is_empty()).collect()
}

/// Bracketed, comma-joined citation links wrapped in a `<span>`.
fn citation_span(stem: &str, keys: &[&str]) -> NodeRef {
    let span = dom::new_element("span", &[]);
    span.append(NodeRef::new_text("["));

    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            span.append(NodeRef::new_text(","));
        }
        let href = format!("{stem}/{key}");
        let link = dom::new_element("a", &[("href", &href), ("class", "citation")]);
        link.append(NodeRef::new_text(*key));
        span.append(link);
    }

    span.append(NodeRef::new_text("]"));
    span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{test_context, test_page};

    fn rewrite(is_root: bool, body: &str) -> String {
        let page = test_page(body);
        CitationRewriter
            .apply(&page, &test_context(is_root, "{}"))
            .unwrap();
        let body = dom::select_first(page.document(), "body").unwrap().unwrap();
        dom::inner_html(body.as_node())
    }

    #[test]
    fn test_citation_keys_drop_empty() {
        assert_eq!(citation_keys("a,b,,c"), ["a", "b", "c"]);
        assert_eq!(citation_keys("a,"), ["a"]);
        assert_eq!(citation_keys(" a, b"), [" a", " b"]);
        assert!(citation_keys(",,").is_empty());
    }

    #[test]
    fn test_root_page_citations() {
        assert_eq!(
            rewrite(true, r##"<p>see <a href="#BIB">a,b,,c</a>.</p>"##),
            "<p>see <span>[\
             <a class=\"citation\" href=\"./bib/#b:/a\">a</a>,\
             <a class=\"citation\" href=\"./bib/#b:/b\">b</a>,\
             <a class=\"citation\" href=\"./bib/#b:/c\">c</a>\
             ]</span>.</p>"
        );
    }

    #[test]
    fn test_nested_page_citation() {
        assert_eq!(
            rewrite(false, r##"<a href="#BIB">knuth1984</a>"##),
            r#"<span>[<a class="citation" href="../bib/#b:/knuth1984">knuth1984</a>]</span>"#
        );
    }

    #[test]
    fn test_empty_citation_list() {
        assert_eq!(
            rewrite(true, r##"<a href="#BIB">,</a>"##),
            "<span>[]</span>"
        );
    }

    #[test]
    fn test_other_links_untouched() {
        let body = r##"<a href="#BIBLIO">x</a><a>no href</a><a href="#bib">y</a>"##;
        assert_eq!(rewrite(true, body), body);
    }
}
