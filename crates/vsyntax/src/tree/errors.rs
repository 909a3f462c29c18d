use rowan::TextRange;
use serde::Serialize;

use super::LineIndex;
use super::Point;
use crate::parser::{SyntaxKind, SyntaxNode};

/// An `ERROR` or `MISSING` node found in a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNode {
    #[serde(serialize_with = "serialize_kind")]
    pub kind: SyntaxKind,
    #[serde(serialize_with = "serialize_range")]
    pub range: TextRange,
    pub start: Point,
    pub end: Point,
}

impl ErrorNode {
    pub fn is_missing(&self) -> bool {
        self.kind == SyntaxKind::Missing
    }
}

fn serialize_kind<S: serde::Serializer>(kind: &SyntaxKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.name())
}

fn serialize_range<S: serde::Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeTuple;
    let mut tuple = s.serialize_tuple(2)?;
    tuple.serialize_element(&u32::from(range.start()))?;
    tuple.serialize_element(&u32::from(range.end()))?;
    tuple.end()
}

fn is_error_kind(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::Error | SyntaxKind::Missing)
}

/// Whether `node` is, or contains, an `ERROR` or `MISSING` node.
pub fn has_error(node: &SyntaxNode) -> bool {
    node.descendants().any(|n| is_error_kind(n.kind()))
}

/// Error nodes in document order. Nested error nodes are reported too.
pub fn error_nodes(root: &SyntaxNode, index: &LineIndex) -> Vec<ErrorNode> {
    root.descendants()
        .filter(|n| is_error_kind(n.kind()))
        .map(|n| {
            let range = n.text_range();
            ErrorNode {
                kind: n.kind(),
                range,
                start: index.point(range.start()),
                end: index.point(range.end()),
            }
        })
        .collect()
}
