//! Non-ASCII character check for source files.
//!
//! Prints `FILE LINE COL: TEXT` for the first non-7-bit character of each
//! offending line (1-based positions). Reads stdin when no file is given.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::debug;
use crate::utils::plural_count;

/// A line holding at least one non-ASCII character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonAsciiLine {
    pub source: String,
    pub line: usize,
    pub column: usize,
    pub text: String,
}

impl fmt::Display for NonAsciiLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}: {}", self.source, self.line, self.column, self.text)
    }
}

pub fn check_files(files: &[PathBuf]) -> Result<()> {
    let mut found = 0;

    if files.is_empty() {
        for hit in scan_non_ascii("--", io::stdin().lock())? {
            println!("{hit}");
            found += 1;
        }
    }

    for path in files {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let hits = scan_non_ascii(&path.display().to_string(), BufReader::new(file))
            .with_context(|| format!("Failed to read {}", path.display()))?;
        for hit in hits {
            println!("{hit}");
            found += 1;
        }
    }

    debug!("check"; "{} with non-ASCII characters", plural_count(found, "line"));
    Ok(())
}

/// Scan `reader` line by line for bytes above 127.
///
/// Works on raw bytes so files in a legacy encoding are reported rather
/// than rejected. Every byte before the first hit is ASCII, so its byte
/// offset is also its character column.
pub fn scan_non_ascii(source: &str, mut reader: impl BufRead) -> Result<Vec<NonAsciiLine>> {
    let mut hits = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;

    while reader.read_until(b'\n', &mut buf)? > 0 {
        line += 1;
        if let Some(column) = buf.iter().position(|b| !b.is_ascii()) {
            hits.push(NonAsciiLine {
                source: source.to_string(),
                line,
                column: column + 1,
                text: String::from_utf8_lossy(&buf).trim_end().to_string(),
            });
        }
        buf.clear();
    }
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_reports_first_character_per_line() {
        let input = "plain\ncafé é\n\tnaïve  \nascii again\n";
        let hits = scan_non_ascii("notes.md", input.as_bytes()).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].to_string(), "notes.md 2 4: café é");
        assert_eq!(hits[1].line, 3);
        assert_eq!(hits[1].column, 4);
        assert_eq!(hits[1].text, "\tnaïve");
    }

    #[test]
    fn test_scan_reports_legacy_encoding() {
        let input: &[u8] = b"ok\r\ncaf\xe9 au lait\r\nfin";
        let hits = scan_non_ascii("latin1.txt", input).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 2);
        assert_eq!(hits[0].column, 4);
        assert_eq!(hits[0].text, "caf\u{fffd} au lait");
    }

    #[test]
    fn test_check_files_accepts_non_utf8_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, b"\xff\xfe header\n").unwrap();
        assert!(check_files(&[path]).is_ok());
    }

    #[test]
    fn test_scan_clean_input() {
        assert!(scan_non_ascii("--", "all ascii\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_check_files_missing_file() {
        let err = check_files(&[PathBuf::from("/nonexistent/notes.md")]).unwrap_err();
        assert!(err.to_string().contains("notes.md"));
    }
}
