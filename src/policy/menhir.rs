//! Removal of menhir-invoking stanzas.
//!
//! Parser files are pre-generated before the cross build, so both the direct
//! `(menhir ...)` stanzas and the `(rule ...)` stanzas that shell out to the
//! menhir binary (error-message generation and the like) must be stripped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::RemovalPolicy;

/// Standalone-word match, so `menhirLib` on its own never triggers removal.
static MENHIR_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmenhir\b").unwrap());

/// A `rule` that only mentions the word menhir in a comment or string is
/// still removed. The coarseness is accepted for machine-generated files.
#[derive(Debug, Default, Clone, Copy)]
pub struct Menhir;

impl RemovalPolicy for Menhir {
    fn decide(&self, raw: &str) -> Option<String> {
        if raw.starts_with("(menhir") {
            Some("menhir stanza".to_string())
        } else if raw.starts_with("(rule") && MENHIR_WORD.is_match(raw) {
            Some("rule invoking menhir".to_string())
        } else {
            None
        }
    }

    fn replacement(&self, raw: &str, reason: &str) -> String {
        // Every original line survives, commented, so the rewrite stays
        // auditable line for line.
        let mut out = String::with_capacity(raw.len());
        for (i, line) in raw.lines().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str("; REMOVED (");
            out.push_str(reason);
            out.push_str("): ");
            out.push_str(line);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menhir_stanza_is_removed() {
        assert_eq!(
            Menhir.decide("(menhir (modules parser))").as_deref(),
            Some("menhir stanza")
        );
    }

    #[test]
    fn rule_running_menhir_is_removed() {
        assert_eq!(
            Menhir
                .decide("(rule (action (run menhir --explain parser.mly)))")
                .as_deref(),
            Some("rule invoking menhir")
        );
    }

    #[test]
    fn word_boundary_excludes_menhir_lib() {
        assert!(Menhir.decide("(rule (deps menhirLibFoo.ml))").is_none());
    }

    #[test]
    fn rule_without_menhir_is_kept() {
        assert!(Menhir.decide("(rule (action (run ocamllex lexer.mll)))").is_none());
    }

    #[test]
    fn non_rule_stanza_mentioning_menhir_is_kept() {
        // Only menhir- and rule-headed stanzas are candidates.
        assert!(Menhir.decide("(library (libraries menhir))").is_none());
    }

    #[test]
    fn every_stanza_line_is_commented() {
        let raw = "(rule\n (action\n  (run menhir)))";
        let marker = Menhir.replacement(raw, "rule invoking menhir");
        assert_eq!(
            marker,
            "; REMOVED (rule invoking menhir): (rule\n\
             ; REMOVED (rule invoking menhir):  (action\n\
             ; REMOVED (rule invoking menhir):   (run menhir)))"
        );
    }
}
