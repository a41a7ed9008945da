//! Page decoration command.
//!
//! Pages are independent, so they are decorated in parallel. A page that
//! fails keeps its original content; the command fails once every page
//! has been attempted.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use super::DecorateArgs;
use crate::config::DecorConfig;
use crate::logger::ProgressLine;
use crate::pipeline::decorate_html;
use crate::utils::files::collect_page_files;
use crate::utils::{plural_count, plural_s};
use crate::{debug, log};

/// What happened to one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Decorated,
    /// The page does not include the decorator script.
    Skipped,
}

/// Decorate every page selected by `args`.
pub fn decorate_site(args: &DecorateArgs, config: &DecorConfig) -> Result<()> {
    let files = collect_page_files(&args.paths, &config.site)?;

    if files.is_empty() {
        log!("decorate"; "no pages found");
        return Ok(());
    }

    log!("decorate"; "decorating {}", plural_count(files.len(), "page"));

    let progress = ProgressLine::new("pages", files.len());
    let results: Vec<(PathBuf, Result<PageStatus>)> = files
        .par_iter()
        .map(|path| {
            let result = decorate_file(path, config, args.dry_run);
            progress.inc();
            (path.clone(), result)
        })
        .collect();
    progress.finish();

    report(&results, config.get_root(), args.dry_run)
}

/// Decorate one page file, writing it back unless `dry_run`.
pub fn decorate_file(path: &Path, config: &DecorConfig, dry_run: bool) -> Result<PageStatus> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let Some(decorated) = decorate_html(&html, config)
        .with_context(|| format!("Failed to decorate {}", path.display()))?
    else {
        return Ok(PageStatus::Skipped);
    };

    if !dry_run {
        fs::write(path, decorated)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(PageStatus::Decorated)
}

fn report(results: &[(PathBuf, Result<PageStatus>)], root: &Path, dry_run: bool) -> Result<()> {
    let mut decorated = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for (path, result) in results {
        let shown = path.strip_prefix(root).unwrap_or(path.as_path());
        match result {
            Ok(PageStatus::Decorated) => decorated += 1,
            Ok(PageStatus::Skipped) => {
                skipped += 1;
                debug!("decorate"; "skipped {} (no decorator script)", shown.display());
            }
            Err(e) => {
                failed += 1;
                log!("failed"; "{}: {:#}", shown.display(), e);
            }
        }
    }

    let verb = if dry_run { "would decorate" } else { "decorated" };
    log!(
        "decorate";
        "{} {}, {} skipped",
        verb,
        plural_count(decorated, "page"),
        skipped
    );

    if failed > 0 {
        bail!("{} page{} failed to decorate", failed, plural_s(failed));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ROOT_PAGE: &str = r##"<html><body><div class="headings"></div>
<p><a href="#g:term">term</a></p>
<script src="site.js" ROOT="yes" CROSSREF="{}"></script></body></html>"##;

    const BROKEN_PAGE: &str = r##"<html><body><a href="#REF">s:none</a>
<script src="../site.js" ROOT="" CROSSREF="{}"></script></body></html>"##;

    fn write_site() -> (TempDir, DecorConfig) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("ch01")).unwrap();
        std::fs::write(dir.path().join("index.html"), ROOT_PAGE).unwrap();
        std::fs::write(dir.path().join("plain.html"), "<p>no script</p>").unwrap();

        let mut config = DecorConfig::default();
        config.root = dir.path().to_path_buf();
        config.site = dir.path().to_path_buf();
        (dir, config)
    }

    #[test]
    fn test_decorate_file_writes_page() {
        let (dir, config) = write_site();
        let path = dir.path().join("index.html");

        assert_eq!(decorate_file(&path, &config, false).unwrap(), PageStatus::Decorated);

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(r#"href="./gloss/#g:term""#));
        assert!(!html.contains("headings"));
    }

    #[test]
    fn test_decorate_file_dry_run_keeps_page() {
        let (dir, config) = write_site();
        let path = dir.path().join("index.html");

        assert_eq!(decorate_file(&path, &config, true).unwrap(), PageStatus::Decorated);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ROOT_PAGE);
    }

    #[test]
    fn test_decorate_file_skips_plain_page() {
        let (dir, config) = write_site();
        let path = dir.path().join("plain.html");

        assert_eq!(decorate_file(&path, &config, false).unwrap(), PageStatus::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>no script</p>");
    }

    #[test]
    fn test_decorate_site_reports_failures() {
        let (dir, config) = write_site();
        let broken = dir.path().join("ch01/index.html");
        std::fs::write(&broken, BROKEN_PAGE).unwrap();

        let args = DecorateArgs {
            paths: Vec::new(),
            dry_run: false,
            verbose: false,
        };
        let err = decorate_site(&args, &config).unwrap_err();
        assert!(err.to_string().contains("1 page failed"));

        // The failing page is left untouched, the others are written
        assert_eq!(std::fs::read_to_string(&broken).unwrap(), BROKEN_PAGE);
        let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("gloss"));
    }
}
