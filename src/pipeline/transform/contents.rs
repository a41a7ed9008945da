//! Table-of-contents builder.
//!
//! Section headings are the `h2` elements whose id carries the section
//! prefix. The contents block lists them in document order; a page with no
//! section headings loses the container altogether.

use kuchiki::NodeRef;

use super::Transform;
use crate::config::TocConfig;
use crate::page::dom;
use crate::page::{DecorateError, Page, PageContext};

/// A section heading picked up for the contents list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionHeading {
    id: String,
    /// Inner markup of the heading, copied verbatim into the list item.
    label: String,
}

pub struct ContentsBuilder<'a> {
    config: &'a TocConfig,
}

impl<'a> ContentsBuilder<'a> {
    pub const fn new(config: &'a TocConfig) -> Self {
        Self { config }
    }

    fn collect_headings(&self, page: &Page) -> Result<Vec<SectionHeading>, DecorateError> {
        Ok(dom::select_all(page.document(), "h2")?
            .into_iter()
            .filter_map(|heading| {
                let id = dom::attr(&heading, "id")?;
                id.starts_with(&self.config.prefix).then(|| SectionHeading {
                    label: dom::inner_html(heading.as_node()),
                    id,
                })
            })
            .collect())
    }

    /// `<h2>Contents</h2><ol>` with one linked item per heading.
    fn render(&self, container: &NodeRef, headings: &[SectionHeading]) {
        dom::remove_children(container);

        let title = dom::new_element("h2", &[]);
        title.append(NodeRef::new_text(self.config.title.as_str()));
        container.append(title);

        let list = dom::new_element(self.config.list.tag(), &[]);
        for heading in headings {
            let href = format!("#{}", heading.id);
            let link = dom::new_element("a", &[("href", &href)]);
            for child in dom::parse_fragment(&heading.label) {
                link.append(child);
            }

            let item = dom::new_element("li", &[]);
            item.append(link);

            list.append(NodeRef::new_text("\n"));
            list.append(item);
        }
        container.append(list);
    }
}

impl Transform for ContentsBuilder<'_> {
    fn name(&self) -> &'static str {
        "contents"
    }

    fn apply(&self, page: &Page, _ctx: &PageContext) -> Result<(), DecorateError> {
        let Some(container) = dom::select_first(page.document(), &self.config.selector)? else {
            return Ok(());
        };

        let headings = self.collect_headings(page)?;
        if headings.is_empty() {
            container.as_node().detach();
            return Ok(());
        }

        self.render(container.as_node(), &headings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListKind;
    use crate::page::{test_context, test_page};

    fn run(config: &TocConfig, body: &str) -> Page {
        let page = test_page(body);
        ContentsBuilder::new(config)
            .apply(&page, &test_context(false, "{}"))
            .unwrap();
        page
    }

    fn contents(page: &Page) -> String {
        let container = dom::select_first(page.document(), "div.headings")
            .unwrap()
            .unwrap();
        dom::inner_html(container.as_node())
    }

    #[test]
    fn test_lists_section_headings_in_order() {
        let page = run(
            &TocConfig::default(),
            r#"<div class="headings">placeholder</div>
<h2 id="s:zeta">Zeta <em>last</em></h2>
<h2 id="other">Not a section</h2>
<h2>No id</h2>
<h3 id="s:deep">Too deep</h3>
<h2 id="s:alpha">Alpha</h2>"#,
        );

        assert_eq!(
            contents(&page),
            "<h2>Contents</h2><ol>\n\
             <li><a href=\"#s:zeta\">Zeta <em>last</em></a></li>\n\
             <li><a href=\"#s:alpha\">Alpha</a></li></ol>"
        );
    }

    #[test]
    fn test_removes_container_without_headings() {
        let page = run(
            &TocConfig::default(),
            r#"<main><div class="headings">x</div><h2 id="intro">Intro</h2></main>"#,
        );

        assert!(dom::select_first(page.document(), "div.headings").unwrap().is_none());
        assert!(page.to_html().contains("<main><h2 id=\"intro\">Intro</h2></main>"));
    }

    #[test]
    fn test_absent_container_is_noop() {
        let page = test_page(r#"<h2 id="s:intro">Intro</h2>"#);
        let before = page.to_html();
        ContentsBuilder::new(&TocConfig::default())
            .apply(&page, &test_context(true, "{}"))
            .unwrap();
        assert_eq!(page.to_html(), before);
    }

    #[test]
    fn test_custom_list_and_title() {
        let config = TocConfig {
            list: ListKind::Ul,
            title: "Sections".to_string(),
            ..TocConfig::default()
        };
        let page = run(
            &config,
            r#"<div class="headings"></div><h2 id="s:a">A &amp; B</h2>"#,
        );

        assert_eq!(
            contents(&page),
            "<h2>Sections</h2><ul>\n<li><a href=\"#s:a\">A &amp; B</a></li></ul>"
        );
    }
}
