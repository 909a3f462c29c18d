//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Project root to scan (positional).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .value_name("ROOT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("V project directory")
}

/// Source file to parse (positional, `-` for stdin).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("V source file, or - for stdin")
}

/// Only print one pass/fail line per file (--hide-ranges).
pub fn hide_ranges_arg() -> Arg {
    Arg::new("hide_ranges")
        .long("hide-ranges")
        .action(ArgAction::SetTrue)
        .help("Print one pass/fail line per file instead of every error range")
}

/// Write report.json into the current directory (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Write a report.json summary into the current directory")
}

/// Also scan test files and test directories (--include-tests).
pub fn include_tests_arg() -> Arg {
    Arg::new("include_tests")
        .long("include-tests")
        .action(ArgAction::SetTrue)
        .help("Also check *_test.v files and tests/ and js/ directories")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Print every token and trivia (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Print the full CST with tokens and trivia")
}

/// Show byte ranges (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte ranges (with --raw)")
}

/// Print node-types.json instead of grammar metadata (--node-types).
pub fn node_types_arg() -> Arg {
    Arg::new("node_types")
        .long("node-types")
        .action(ArgAction::SetTrue)
        .help("Print node types instead of grammar metadata")
}
