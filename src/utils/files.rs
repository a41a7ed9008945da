//! Page file discovery.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;

/// Check whether a path names a rendered HTML page.
pub fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// All HTML pages under `dir`, in sorted walk order.
pub fn collect_html_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_html(path))
        .collect()
}

/// Resolve CLI paths into the list of pages to decorate.
///
/// - no paths: every page under `site_dir`
/// - `-`: paths read from stdin, one per line
/// - a file: taken as is (must be HTML)
/// - a directory: every page below it
pub fn collect_page_files(paths: &[PathBuf], site_dir: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        if !site_dir.is_dir() {
            bail!("Site directory not found: {}", site_dir.display());
        }
        return Ok(collect_html_files(site_dir));
    }

    let mut pages = Vec::new();
    for path in &paths {
        if path.is_file() {
            if !is_html(path) {
                bail!("Not an HTML page: {}", path.display());
            }
            pages.push(path.clone());
        } else if path.is_dir() {
            pages.extend(collect_html_files(path));
        } else {
            bail!("Path not found: {}", path.display());
        }
    }

    Ok(pages)
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    read_paths(io::stdin().lock())
}

fn read_paths(reader: impl BufRead) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}
