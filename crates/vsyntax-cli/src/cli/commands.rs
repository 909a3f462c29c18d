//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("vsyntax")
        .about("Resilient parser for the V language")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(tree_command())
        .subcommand(grammar_command())
}

/// Parse every V file under a project root and report syntax errors.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Parse every V file under a directory and report syntax errors")
        .after_help(
            r#"EXAMPLES:
  vsyntax check ~/v/vlib                  # every error range
  vsyntax check ~/v/vlib --hide-ranges    # one line per file
  vsyntax check . --json                  # also write report.json

Exits with status 1 if any file has a syntax error."#,
        )
        .arg(root_arg())
        .arg(hide_ranges_arg())
        .arg(json_arg())
        .arg(include_tests_arg())
        .arg(color_arg())
}

/// Print the syntax tree of one file.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Print the syntax tree of a V file")
        .after_help(
            r#"EXAMPLES:
  vsyntax tree main.v                 # named nodes as S-expression
  vsyntax tree main.v --raw --spans   # full CST with byte ranges
  cat main.v | vsyntax tree -         # read from stdin"#,
        )
        .arg(file_arg())
        .arg(raw_arg())
        .arg(spans_arg())
        .arg(color_arg())
}

/// Print grammar metadata.
pub fn grammar_command() -> Command {
    Command::new("grammar")
        .about("Print grammar metadata or node types as JSON")
        .arg(node_types_arg())
}
