//! Base-directory resolution for the fixed mccs dune targets.
//!
//! The cross-compile driver invokes the filter from varying directories
//! (sometimes `$SRC_DIR/opam`, sometimes the checkout root), so the base is
//! probed rather than assumed.

use std::env;
use std::path::{Path, PathBuf};

/// Explicit inputs to base resolution. Built once at the CLI boundary; the
/// library itself never reads the process environment, which keeps
/// resolution testable without mutating env vars.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    pub src_dir: PathBuf,
    pub cwd: PathBuf,
}

impl BaseConfig {
    /// Reads `SRC_DIR` (defaulting to `.`) and the current directory.
    pub fn from_env() -> Self {
        Self {
            src_dir: env::var_os("SRC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            cwd: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Picks the directory that actually contains `src_ext`: the `opam`
    /// subdirectory of the source tree, then the working directory, then the
    /// source tree itself as a last resort.
    pub fn resolve_base(&self) -> PathBuf {
        let opam_dir = self.src_dir.join("opam");
        if opam_dir.join("src_ext").is_dir() {
            opam_dir
        } else if self.cwd.join("src_ext").is_dir() {
            self.cwd.clone()
        } else {
            self.src_dir.clone()
        }
    }
}

/// The two mccs dune files patched for cross-compilation.
pub fn dune_targets(base: &Path) -> [PathBuf; 2] {
    [
        base.join("src_ext/mccs/src/dune"),
        base.join("src_ext/mccs/src/glpk/dune"),
    ]
}
