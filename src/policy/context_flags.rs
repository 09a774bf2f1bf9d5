//! Removal of `context_flags` stanzas and pre-generated sexp rules.
//!
//! For cross-compilation the sexp files that `context_flags.exe` would emit
//! are pre-generated and checked in, so the stanzas that build and run the
//! helper (a target-architecture binary the build machine cannot execute)
//! have to go, along with any rule that would regenerate those files.

use crate::rewrite::RemovalPolicy;

/// Width of the truncated first line quoted in the replacement marker.
const MARKER_WIDTH: usize = 60;

#[derive(Debug, Default, Clone, Copy)]
pub struct ContextFlags;

impl RemovalPolicy for ContextFlags {
    fn decide(&self, raw: &str) -> Option<String> {
        let lowered = raw.to_lowercase();
        let matched = lowered.contains("context_flags")
            || lowered.contains("clibs.sexp")
            || lowered.contains("cxxflags.sexp")
            || lowered.contains("cflags.sexp")
            // flags.sexp alone is too generic; only a (target ...) counts.
            || (lowered.contains("flags.sexp") && lowered.contains("(target"));
        matched.then(|| truncated_first_line(raw))
    }

    fn replacement(&self, _raw: &str, reason: &str) -> String {
        format!("; DISABLED for cross-compilation: {reason}...\n")
    }
}

fn truncated_first_line(raw: &str) -> String {
    let first = raw.lines().next().unwrap_or("");
    first.chars().take(MARKER_WIDTH).collect()
}
