#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammar contract data structures for vsyntax.
//!
//! Two parts:
//! - **Node types**: 1:1 mapping to tree-sitter's `node-types.json`, both directions
//! - **Grammar metadata** ([`grammar`]): precedence table, conflicts, hidden rules
//!
//! [`utils`] holds the case conversions used to derive contract names from kind names.
//!
//! Nothing here knows about the V language itself. The `vsyntax` crate fills
//! these structures from its syntax kinds, and downstream tools consume them.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod grammar;
pub mod utils;

// ============================================================================
// Node type table
// ============================================================================

/// Node definition as found in `node-types.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeType {
    #[serde(rename = "type")]
    pub type_name: String,
    pub named: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub root: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub extra: bool,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, FieldInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<FieldInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtypes: Option<Vec<TypeRef>>,
}

/// Cardinality constraints plus allowed types for a field or children slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub multiple: bool,
    pub required: bool,
    pub types: Vec<TypeRef>,
}

/// Reference to a node type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(rename = "type")]
    pub type_name: String,
    pub named: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl NodeType {
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            named: true,
            root: false,
            extra: false,
            fields: IndexMap::new(),
            children: None,
            subtypes: None,
        }
    }

    pub fn anonymous(type_name: impl Into<String>) -> Self {
        Self {
            named: false,
            ..Self::named(type_name)
        }
    }
}

impl TypeRef {
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            named: true,
        }
    }
}

impl FieldInfo {
    pub fn cardinality(&self) -> Cardinality {
        Cardinality {
            multiple: self.multiple,
            required: self.required,
        }
    }

    pub fn accepts(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.type_name == type_name)
    }
}

/// Cardinality info for a field or children slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub multiple: bool,
    pub required: bool,
}

/// Parse `node-types.json` content.
pub fn parse_node_types(json: &str) -> Result<Vec<NodeType>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Render node types in the pretty-printed `node-types.json` layout.
pub fn node_types_to_json(nodes: &[NodeType]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(nodes)
}

// ============================================================================
// Lookup
// ============================================================================

/// Name-indexed view over a node type list.
#[derive(Debug, Clone)]
pub struct NodeTypeTable {
    nodes: Vec<NodeType>,
    by_name: HashMap<String, usize>,
}

impl NodeTypeTable {
    pub fn new(nodes: Vec<NodeType>) -> Self {
        let by_name = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.named)
            .map(|(i, n)| (n.type_name.clone(), i))
            .collect();
        Self { nodes, by_name }
    }

    pub fn nodes(&self) -> &[NodeType] {
        &self.nodes
    }

    pub fn get(&self, type_name: &str) -> Option<&NodeType> {
        self.by_name.get(type_name).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.by_name.contains_key(type_name)
    }

    pub fn root(&self) -> Option<&NodeType> {
        self.nodes.iter().find(|n| n.root)
    }

    pub fn is_extra(&self, type_name: &str) -> bool {
        self.get(type_name).is_some_and(|n| n.extra)
    }

    pub fn field(&self, type_name: &str, field: &str) -> Option<&FieldInfo> {
        self.get(type_name)?.fields.get(field)
    }

    /// Whether `child` may appear in `field` of `type_name`, looking through supertypes.
    pub fn is_valid_field_type(&self, type_name: &str, field: &str, child: &str) -> bool {
        let Some(info) = self.field(type_name, field) else {
            return false;
        };
        info.types
            .iter()
            .any(|t| t.type_name == child || self.is_subtype(&t.type_name, child))
    }

    /// Whether `child` is (transitively) a subtype of the supertype `parent`.
    pub fn is_subtype(&self, parent: &str, child: &str) -> bool {
        let Some(subtypes) = self.get(parent).and_then(|n| n.subtypes.as_ref()) else {
            return false;
        };
        subtypes
            .iter()
            .any(|t| t.type_name == child || self.is_subtype(&t.type_name, child))
    }
}
