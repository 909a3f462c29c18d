//! Printed forms of a tree: the tree-sitter style S-expression and a raw CST dump.

use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::{SyntaxKind, SyntaxNode};

/// Named nodes and comments, one per line, without field names.
///
/// ```text
/// (source_file
///   (short_var_declaration
///     (expression_list
///       (identifier))
///     (expression_list
///       (int_literal))))
/// ```
pub fn sexp(root: &SyntaxNode) -> String {
    let mut out = String::new();
    write_sexp(root, 0, &mut out);
    out
}

fn write_sexp(node: &SyntaxNode, depth: usize, out: &mut String) {
    if depth > 0 {
        out.push('\n');
        indent(depth, out);
    }

    if node.kind() == SyntaxKind::Missing {
        let expected = node
            .children_with_tokens()
            .find_map(|c| c.into_token())
            .map(|t| t.kind());
        match expected {
            Some(kind) if is_word_token(kind) => {
                let _ = write!(out, "(MISSING {})", kind.name());
            }
            Some(kind) => {
                let _ = write!(out, "(MISSING {:?})", kind.name());
            }
            None => out.push_str("(MISSING)"),
        }
        return;
    }

    out.push('(');
    out.push_str(node.kind().name());
    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Node(n) => write_sexp(&n, depth + 1, out),
            NodeOrToken::Token(t) if t.kind().is_named() => {
                out.push('\n');
                indent(depth + 1, out);
                out.push('(');
                out.push_str(t.kind().name());
                out.push(')');
            }
            NodeOrToken::Token(_) => {}
        }
    }
    out.push(')');
}

/// Token kinds printed bare inside `MISSING`, like `(MISSING identifier)`.
fn is_word_token(kind: SyntaxKind) -> bool {
    !kind.is_keyword()
        && kind
            .name()
            .starts_with(|c: char| c.is_ascii_lowercase() || c == '_')
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Every node and non-whitespace token, by kind, with text and optionally spans.
pub fn dump(root: &SyntaxNode, spans: bool) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for event in root.preorder_with_tokens() {
        match event {
            rowan::WalkEvent::Enter(NodeOrToken::Node(node)) => {
                indent(depth, &mut out);
                let _ = write!(out, "{:?}", node.kind());
                if spans {
                    let _ = write!(out, "@{:?}", node.text_range());
                }
                out.push('\n');
                depth += 1;
            }
            rowan::WalkEvent::Leave(NodeOrToken::Node(_)) => depth -= 1,
            rowan::WalkEvent::Enter(NodeOrToken::Token(token)) => {
                if matches!(token.kind(), SyntaxKind::Whitespace | SyntaxKind::Newline) {
                    continue;
                }
                indent(depth, &mut out);
                let _ = write!(out, "{:?}", token.kind());
                if spans {
                    let _ = write!(out, "@{:?}", token.text_range());
                }
                let _ = writeln!(out, " {:?}", token.text());
            }
            rowan::WalkEvent::Leave(NodeOrToken::Token(_)) => {}
        }
    }
    out
}
