//! Handles all user-facing status output for the CLI.
//!
//! Progress lines go to stdout so the orchestrating build log shows exactly
//! which dune files were touched and how much was removed; error rendering
//! stays with the caller.

use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prints a plain progress line.
pub fn status(line: &str) {
    println!("{line}");
}

/// Prints a per-file success line for the context-flags mode.
pub fn rewrote(path: &Path, removed_stanzas: usize) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    println!(
        "  Rewrote: {} (removed {} stanzas)",
        path.display(),
        removed_stanzas
    );
    let _ = stdout.reset();
}

/// Prints the skip notice for a missing target file.
pub fn skipped(path: &Path) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
    println!("  Skipping (not found): {}", path.display());
    let _ = stdout.reset();
}

/// Prints the per-file summary for the menhir mode.
pub fn processed(path: &Path, removed_lines: usize) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    println!(
        "  Processed {}: {} lines commented out",
        path.display(),
        removed_lines
    );
    let _ = stdout.reset();
}
