//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the unresolved [`ColorChoice`];
//! the `Into<*Args>` impls resolve it against the terminal.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::grammar::GrammarArgs;
use crate::commands::tree::TreeArgs;

#[derive(Debug)]
pub struct CheckParams {
    pub root: PathBuf,
    pub hide_ranges: bool,
    pub json: bool,
    pub include_tests: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            root: m.get_one::<PathBuf>("root").cloned().unwrap_or_default(),
            hide_ranges: m.get_flag("hide_ranges"),
            json: m.get_flag("json"),
            include_tests: m.get_flag("include_tests"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            root: p.root,
            hide_ranges: p.hide_ranges,
            json: p.json,
            include_tests: p.include_tests,
            color: p.color.should_colorize(),
        }
    }
}

#[derive(Debug)]
pub struct TreeParams {
    pub file: PathBuf,
    pub raw: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned().unwrap_or_default(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            file: p.file,
            raw: p.raw,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

#[derive(Debug)]
pub struct GrammarParams {
    pub node_types: bool,
}

impl GrammarParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            node_types: m.get_flag("node_types"),
        }
    }
}

impl From<GrammarParams> for GrammarArgs {
    fn from(p: GrammarParams) -> Self {
        Self {
            node_types: p.node_types,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
