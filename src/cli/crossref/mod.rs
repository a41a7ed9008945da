//! Cross-reference table generation.
//!
//! Produces the JSON payload pages carry in their `CROSSREF` attribute:
//!
//! | Key          | text       | value | toplevel |
//! |--------------|------------|-------|----------|
//! | `s:<lesson>` | `Chapter`  | `3`   | true     |
//! | `s:<extra>`  | `Appendix` | `B`   | true     |
//! | `s:<ident>`  | `Section`  | `3.2` | false    |

mod scan;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use super::CrossRefArgs;
use crate::config::{CrossRefConfig, DecorConfig};
use crate::log;
use crate::utils::plural_count;

use scan::section_ids;

/// One generated table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct GeneratedEntry {
    slug: String,
    toplevel: bool,
    text: &'static str,
    value: String,
}

/// Generate the table and write it to `--output` or stdout.
pub fn generate_crossref(args: &CrossRefArgs, config: &DecorConfig) -> Result<()> {
    let table = build_table(&config.crossref)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&table)?
    } else {
        serde_json::to_string(&table)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("crossref"; "wrote {} to {}", plural_count(table.len(), "key"), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Build the table, chapters first, then appendices, each followed by its sections.
fn build_table(config: &CrossRefConfig) -> Result<Map<String, Value>> {
    let mut table = Map::new();

    for (i, slug) in config.lessons.iter().enumerate() {
        add_unit(&mut table, &config.source, slug, "Chapter", (i + 1).to_string())?;
    }

    for (letter, slug) in ('A'..='Z').zip(&config.extras) {
        add_unit(&mut table, &config.source, slug, "Appendix", letter.to_string())?;
    }

    Ok(table)
}

/// Add a chapter or appendix entry plus one entry per section heading.
fn add_unit(
    table: &mut Map<String, Value>,
    source: &Path,
    slug: &str,
    text: &'static str,
    number: String,
) -> Result<()> {
    let path = source.join(format!("{slug}.md"));
    let markdown =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    insert(table, format!("s:{slug}"), GeneratedEntry {
        slug: slug.to_string(),
        toplevel: true,
        text,
        value: number.clone(),
    })?;

    for (i, id) in section_ids(&markdown).into_iter().enumerate() {
        insert(table, id.to_string(), GeneratedEntry {
            slug: slug.to_string(),
            toplevel: false,
            text: "Section",
            value: format!("{number}.{}", i + 1),
        })?;
    }

    Ok(())
}

fn insert(table: &mut Map<String, Value>, key: String, entry: GeneratedEntry) -> Result<()> {
    table.insert(key, serde_json::to_value(entry)?);
    Ok(())
}
