//! The dune-prune Command-Line Interface.
//!
//! This module is the main entry point for both filter modes and owns the
//! exit-code policy: 0 on success, 1 on usage errors, missing files, and
//! I/O failures.

use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::args::{Command, PruneArgs};
use crate::config::{dune_targets, BaseConfig};
use crate::diagnostics::PruneError;
use crate::policy::{ContextFlags, Menhir};
use crate::rewrite::rewrite_file;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = match PruneArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        // The build orchestrator treats any failure as exit 1.
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let result = match args.command {
        Command::ContextFlags { src_dir } => handle_context_flags(src_dir),
        Command::Menhir { file } => handle_menhir(&file),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

/// Handles the `context-flags` subcommand: both fixed mccs dune paths, with
/// missing files tolerated per path.
fn handle_context_flags(src_dir: Option<PathBuf>) -> Result<(), PruneError> {
    let mut config = BaseConfig::from_env();
    if let Some(dir) = src_dir {
        config.src_dir = dir;
    }
    let base = config.resolve_base();

    output::status("Removing context_flags stanzas from mccs dune files...");
    output::status(&format!(
        "  SRC_DIR={}, cwd={}, base={}",
        config.src_dir.display(),
        config.cwd.display(),
        base.display()
    ));

    for path in dune_targets(&base) {
        match rewrite_file(&path, &ContextFlags) {
            Ok(outcome) => output::rewrote(&path, outcome.removed_stanzas),
            Err(PruneError::FileNotFound { path }) => output::skipped(&path),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Handles the `menhir` subcommand: a single file, where a missing path is
/// fatal.
fn handle_menhir(file: &Path) -> Result<(), PruneError> {
    let outcome = rewrite_file(file, &Menhir)?;
    output::processed(file, outcome.removed_lines);
    Ok(())
}
