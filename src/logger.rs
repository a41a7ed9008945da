//! Terminal output: `[module]` prefixed log lines and a page counter.
//!
//! ```ignore
//! log!("decorate"; "decorating {} pages", count);
//! debug!("pipeline"; "{} done", stage);
//!
//! let progress = ProgressLine::new("pages", 42);
//! progress.inc();
//! progress.finish();
//! ```

use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use parking_lot::Mutex;
use std::{
    io::{StdoutLock, Write, stdout},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set by an active [`ProgressLine`] so log lines clear it first.
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a line with a colored `[module]` prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like [`log!`], but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let mut out = stdout().lock();
    if PROGRESS_ACTIVE.load(Ordering::SeqCst) {
        clear_line(&mut out);
    }
    writeln!(out, "{} {message}", colorize_prefix(module)).ok();
    out.flush().ok();
}

/// Bold colored `[module]`, plain when stdout has no color (or `--color never`).
fn colorize_prefix(module: &str) -> String {
    let style = match module.to_ascii_lowercase().as_str() {
        "decorate" => Style::new().bright_blue(),
        "crossref" | "check" => Style::new().bright_green(),
        "error" | "failed" => Style::new().bright_red(),
        _ => Style::new().bright_yellow(),
    }
    .bold();

    format!("[{module}]")
        .if_supports_color(Stream::Stdout, |prefix| prefix.style(style))
        .to_string()
}

fn clear_line(out: &mut StdoutLock<'_>) {
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
}

/// In-place `[decorate] pages(12/40)` counter shared by worker threads.
///
/// Redraws are skipped while another thread holds the display lock, so
/// `inc` never blocks a worker.
pub struct ProgressLine {
    label: &'static str,
    total: usize,
    done: AtomicUsize,
    redraw: Mutex<()>,
}

impl ProgressLine {
    pub fn new(label: &'static str, total: usize) -> Self {
        PROGRESS_ACTIVE.store(true, Ordering::SeqCst);
        let progress = Self {
            label,
            total,
            done: AtomicUsize::new(0),
            redraw: Mutex::new(()),
        };
        progress.draw(false);
        progress
    }

    pub fn inc(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
        if let Some(_guard) = self.redraw.try_lock() {
            self.draw(false);
        }
    }

    fn line(&self) -> String {
        format!("{}({}/{})", self.label, self.done.load(Ordering::Relaxed), self.total)
    }

    fn draw(&self, newline: bool) {
        let mut out = stdout().lock();
        clear_line(&mut out);
        let text = format!("{} {}", colorize_prefix("decorate"), self.line());
        if newline {
            writeln!(out, "{text}").ok();
        } else {
            write!(out, "{text}").ok();
        }
        out.flush().ok();
    }

    /// Leave the final count on screen.
    pub fn finish(self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);
        {
            let _guard = self.redraw.lock();
            self.draw(true);
        }
        std::mem::forget(self);
    }
}

impl Drop for ProgressLine {
    // Only reached when `finish` was skipped, e.g. on panic.
    fn drop(&mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);
        let mut out = stdout().lock();
        clear_line(&mut out);
        out.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_counts() {
        let progress = ProgressLine::new("pages", 3);
        assert_eq!(progress.line(), "pages(0/3)");
        progress.inc();
        progress.inc();
        assert_eq!(progress.line(), "pages(2/3)");
        progress.finish();
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("decorate"), "[decorate]");
        assert_eq!(colorize_prefix("Warning"), "[Warning]");

        owo_colors::set_override(true);
        let colored = colorize_prefix("failed");
        owo_colors::unset_override();
        assert!(colored.starts_with('\u{1b}'));
        assert!(colored.contains("[failed]"));
    }
}
