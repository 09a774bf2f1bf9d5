//! Defines the command-line arguments and subcommands for the dune-prune CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "dune-prune",
    version,
    about = "Dune stanza filters that prepare the opam toolchain for cross-compilation."
)]
pub struct PruneArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strip context_flags stanzas from the fixed mccs dune files.
    ContextFlags {
        /// Source tree root; overrides the SRC_DIR environment variable.
        #[arg(long)]
        src_dir: Option<PathBuf>,
    },
    /// Strip menhir-invoking stanzas from one dune file.
    Menhir {
        /// The dune file to rewrite in place.
        #[arg(required = true)]
        file: PathBuf,
    },
}
