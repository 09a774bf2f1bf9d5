// End-to-end coverage for the context-flags mode: library-level filtering
// plus the CLI driving both fixed mccs dune paths.

use std::fs;

use assert_cmd::Command;
use dune_prune::policy::ContextFlags;
use dune_prune::rewrite::filter_source;
use predicates::str::contains;

#[test]
fn removes_context_flags_rule_and_keeps_library() {
    let input = "(rule (deps context_flags.exe) (target out))\n(library (name foo))\n";
    let outcome = filter_source(input, &ContextFlags);
    assert_eq!(
        outcome.text,
        "; DISABLED for cross-compilation: (rule (deps context_flags.exe) (target out))...\n\
         \n(library (name foo))\n"
    );
    assert_eq!(outcome.removed_stanzas, 1);
}

#[test]
fn input_without_matches_is_unchanged() {
    let input = "; mccs build\n(library\n (name mccs)\n (c_names glpk))\n";
    let outcome = filter_source(input, &ContextFlags);
    assert_eq!(outcome.text, input);
    assert_eq!(outcome.removed_stanzas, 0);
}

#[test]
fn multiline_stanza_collapses_to_one_marker_line() {
    let input = "(rule\n (targets clibs.sexp)\n (action (run ./context_flags.exe clibs)))\n";
    let outcome = filter_source(input, &ContextFlags);
    assert_eq!(
        outcome.text,
        "; DISABLED for cross-compilation: (rule...\n\n"
    );
    assert_eq!(outcome.removed_stanzas, 1);
    assert_eq!(outcome.removed_lines, 1);
}

#[test]
fn nested_match_inside_kept_stanza_does_not_split_it() {
    // The keyword sits inside the stanza, so the whole stanza goes as one
    // unit; nothing is removed partially.
    let input = "(executable\n (name context_flags)\n (modules context_flags))\n";
    let outcome = filter_source(input, &ContextFlags);
    assert_eq!(outcome.removed_stanzas, 1);
    assert!(outcome.text.starts_with("; DISABLED for cross-compilation: (executable"));
}

#[test]
fn cli_rewrites_both_fixed_paths() {
    let src = tempfile::tempdir().unwrap();
    let mccs = src.path().join("src_ext/mccs/src");
    fs::create_dir_all(mccs.join("glpk")).unwrap();
    fs::write(
        mccs.join("dune"),
        "(rule (target cflags.sexp))\n(library (name mccs))\n",
    )
    .unwrap();
    fs::write(mccs.join("glpk/dune"), "(library (name glpk))\n").unwrap();

    Command::cargo_bin("dune-prune")
        .unwrap()
        .arg("context-flags")
        .arg("--src-dir")
        .arg(src.path())
        .assert()
        .success()
        .stdout(contains("Removing context_flags stanzas"))
        .stdout(contains("(removed 1 stanzas)"))
        .stdout(contains("(removed 0 stanzas)"));

    let patched = fs::read_to_string(mccs.join("dune")).unwrap();
    assert!(patched.starts_with("; DISABLED for cross-compilation: (rule (target cflags.sexp))..."));
    assert!(patched.contains("(library (name mccs))"));
    assert_eq!(
        fs::read_to_string(mccs.join("glpk/dune")).unwrap(),
        "(library (name glpk))\n"
    );
}

#[test]
fn cli_skips_missing_targets() {
    let src = tempfile::tempdir().unwrap();

    Command::cargo_bin("dune-prune")
        .unwrap()
        .arg("context-flags")
        .arg("--src-dir")
        .arg(src.path())
        .assert()
        .success()
        .stdout(contains("Skipping (not found)"));
}

#[test]
fn cli_honors_src_dir_environment_variable() {
    let src = tempfile::tempdir().unwrap();
    let mccs = src.path().join("opam/src_ext/mccs/src");
    fs::create_dir_all(&mccs).unwrap();
    fs::write(mccs.join("dune"), "(rule (deps context_flags.exe))\n").unwrap();

    Command::cargo_bin("dune-prune")
        .unwrap()
        .arg("context-flags")
        .env("SRC_DIR", src.path())
        .assert()
        .success()
        .stdout(contains("(removed 1 stanzas)"));

    assert!(fs::read_to_string(mccs.join("dune"))
        .unwrap()
        .starts_with("; DISABLED for cross-compilation:"));
}
