//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, grammar_command, tree_command};

#[test]
fn check_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "vlib"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.root, PathBuf::from("vlib"));
    assert!(!params.hide_ranges);
    assert!(!params.json);
    assert!(!params.include_tests);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_flags() {
    let m = check_command()
        .try_get_matches_from([
            "check",
            "vlib",
            "--hide-ranges",
            "--json",
            "--include-tests",
            "--color",
            "never",
        ])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert!(params.hide_ranges);
    assert!(params.json);
    assert!(params.include_tests);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn check_requires_root() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn color_rejects_unknown_value() {
    let result = check_command().try_get_matches_from(["check", "vlib", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn tree_flags() {
    let m = tree_command()
        .try_get_matches_from(["tree", "main.v", "--raw", "--spans", "--color", "always"])
        .unwrap();
    let params = TreeParams::from_matches(&m);
    assert_eq!(params.file, PathBuf::from("main.v"));
    assert!(params.raw);
    assert!(params.spans);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn tree_reads_stdin_marker() {
    let m = tree_command().try_get_matches_from(["tree", "-"]).unwrap();
    let params = TreeParams::from_matches(&m);
    assert_eq!(params.file, PathBuf::from("-"));
    assert!(!params.raw);
}

#[test]
fn grammar_node_types_flag() {
    let m = grammar_command()
        .try_get_matches_from(["grammar", "--node-types"])
        .unwrap();
    assert!(GrammarParams::from_matches(&m).node_types);

    let m = grammar_command().try_get_matches_from(["grammar"]).unwrap();
    assert!(!GrammarParams::from_matches(&m).node_types);
}

#[test]
fn check_help_lists_flags() {
    let help = check_command().render_help().to_string();
    assert!(help.contains("--hide-ranges"));
    assert!(help.contains("--json"));
    assert!(help.contains("--include-tests"));
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["vsyntax"]);
    assert!(result.is_err());
}
