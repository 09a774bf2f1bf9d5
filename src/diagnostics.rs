//! Unified miette-based diagnostics for the filter pipeline.
//!
//! Malformed dune input is deliberately absent here: an unbalanced
//! expression degrades in the scanner rather than erroring.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PruneError {
    /// Fatal in single-file mode; the multi-file context-flags entry point
    /// catches it and skips the path instead.
    #[error("File not found: {}", path.display())]
    #[diagnostic(code(dune_prune::not_found))]
    FileNotFound { path: PathBuf },

    #[error("Error reading {}: {source}", path.display())]
    #[diagnostic(code(dune_prune::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing {}: {source}", path.display())]
    #[diagnostic(code(dune_prune::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
