//! Grammar-level metadata: precedences, conflicts, hidden rules.

use vsyntax_core::grammar::{Assoc, GrammarInfo, PrecedenceLevel};

use super::node_types::{SUPERTYPES, binary_operators, token_kinds};
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::PREFIX_OPS;

/// Tokens decided by the stateful scanner rather than by a regular expression.
const EXTERNALS: &[SyntaxKind] = &[
    LineTerminator,
    StringOpen,
    StringContent,
    Escape,
    InterpolationOpen,
    InterpolationClose,
    FormatSpec,
    StringClose,
    BlockComment,
    PseudoComptimeIdent,
    Directive,
    DirectiveBody,
    CIncludePath,
    RawBlockContent,
];

const INLINE: &[&str] = &[
    "_simple_statement",
    "_statement_list",
    "_string_part",
    "_content_block",
    "_binded_type",
];

/// Places where the parser settles an ambiguity by lookahead.
const CONFLICTS: &[&[&str]] = &[
    &["type_initializer", "block"],
    &["map", "block"],
    &["parameter_list", "type_only_parameter_list"],
    &["type_parameters", "binary_expression"],
    &["fixed_array", "fixed_array_type"],
    &["fn_literal", "function_type"],
    &["qualified_type", "selector_expression"],
];

/// Binary levels by binding power, strongest first.
const BINARY_LEVELS: &[(&str, u8)] = &[
    ("as", 6),
    ("multiplicative", 5),
    ("additive", 4),
    ("comparative", 3),
    ("and", 2),
    ("or", 1),
];

const UNARY: i32 = 7;

/// Grammar metadata as seen by tree-sitter tooling.
///
/// Binary levels are read back from the Pratt parser's binding powers.
pub fn grammar_info() -> GrammarInfo {
    GrammarInfo {
        name: "v".to_owned(),
        word: Some(Identifier.name().to_owned()),
        extras: vec![LineComment.name().to_owned(), Whitespace.name().to_owned()],
        externals: EXTERNALS.iter().map(|k| k.name().to_owned()).collect(),
        inline: INLINE.iter().map(|&r| r.to_owned()).collect(),
        supertypes: SUPERTYPES.iter().map(|&s| s.to_owned()).collect(),
        conflicts: CONFLICTS
            .iter()
            .map(|group| group.iter().map(|&r| r.to_owned()).collect())
            .collect(),
        precedences: precedences(),
    }
}

fn precedences() -> Vec<PrecedenceLevel> {
    let unary = PrecedenceLevel {
        name: "unary".to_owned(),
        value: UNARY,
        assoc: Assoc::Right,
        operators: token_kinds()
            .filter(|k| PREFIX_OPS.contains(*k))
            .map(|k| k.name().to_owned())
            .collect(),
    };

    let binary = BINARY_LEVELS.iter().map(|&(name, bp)| PrecedenceLevel {
        name: name.to_owned(),
        value: i32::from(bp),
        assoc: Assoc::Left,
        operators: binary_operators()
            .filter(|&(_, level)| level == bp)
            .map(|(kind, _)| kind.name().to_owned())
            .collect(),
    });

    std::iter::once(unary).chain(binary).collect()
}
