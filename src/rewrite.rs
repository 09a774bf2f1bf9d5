//! Filtering engine and in-place file rewriter.
//!
//! The engine walks the token stream from [`crate::scanner`], asks a
//! [`RemovalPolicy`] about every top-level expression, and splices the
//! policy's marker text over the removed spans. Everything else is copied
//! verbatim.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::diagnostics::PruneError;
use crate::scanner::{tokenize, Token};

/// Decides which top-level expressions are removed and what replaces them.
pub trait RemovalPolicy {
    /// Returns the removal reason if `raw` (one balanced expression) must go.
    fn decide(&self, raw: &str) -> Option<String>;

    /// The marker text substituted for a removed expression.
    fn replacement(&self, raw: &str, reason: &str) -> String;
}

/// Result of filtering one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// The rewritten text.
    pub text: String,
    /// Number of top-level expressions replaced by markers.
    pub removed_stanzas: usize,
    /// Number of marker lines emitted in their place.
    pub removed_lines: usize,
}

/// Run `policy` over every top-level expression of `source`.
///
/// Comments and whitespace are never candidates; a keyword occurring inside
/// a kept expression never triggers removal of a nested sub-form.
pub fn filter_source(source: &str, policy: &dyn RemovalPolicy) -> FilterOutcome {
    let mut text = String::with_capacity(source.len());
    let mut removed_stanzas = 0;
    let mut removed_lines = 0;

    for token in tokenize(source) {
        match token {
            Token::Expr(raw) => match policy.decide(raw) {
                Some(reason) => {
                    let marker = policy.replacement(raw, &reason);
                    removed_stanzas += 1;
                    removed_lines += marker.lines().count();
                    text.push_str(&marker);
                }
                None => text.push_str(raw),
            },
            other => text.push_str(other.text()),
        }
    }

    FilterOutcome {
        text,
        removed_stanzas,
        removed_lines,
    }
}

/// Filter `path` in place.
///
/// The rewritten text goes to a sibling temp file first and is renamed over
/// the original, so an interrupted write never leaves a truncated dune file.
pub fn rewrite_file(path: &Path, policy: &dyn RemovalPolicy) -> Result<FilterOutcome, PruneError> {
    let source = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            PruneError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PruneError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let outcome = filter_source(&source, policy);

    let tmp = temp_sibling(path);
    fs::write(&tmp, &outcome.text).map_err(|source| PruneError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        PruneError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(outcome)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "dune".into());
    name.push(".prune-tmp");
    path.with_file_name(name)
}
