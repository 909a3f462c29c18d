//! Grammar metadata types.

use serde::{Deserialize, Serialize};

/// Grammar-level facts exported for tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarInfo {
    /// Grammar name (`"v"`).
    pub name: String,
    /// Keyword identifier rule.
    #[serde(default)]
    pub word: Option<String>,
    /// Extra/trivia nodes.
    #[serde(default)]
    pub extras: Vec<String>,
    /// Tokens produced by the stateful scanner.
    #[serde(default)]
    pub externals: Vec<String>,
    /// Hidden rules whose children are promoted into the parent.
    #[serde(default)]
    pub inline: Vec<String>,
    /// Supertype rules.
    #[serde(default)]
    pub supertypes: Vec<String>,
    /// Rule groups that may match overlapping input.
    #[serde(default)]
    pub conflicts: Vec<Vec<String>>,
    /// Precedence levels, strongest first.
    #[serde(default)]
    pub precedences: Vec<PrecedenceLevel>,
}

/// One named precedence level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedenceLevel {
    pub name: String,
    pub value: i32,
    pub assoc: Assoc,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operators: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assoc {
    Left,
    Right,
    None,
}

impl GrammarInfo {
    pub fn precedence(&self, name: &str) -> Option<&PrecedenceLevel> {
        self.precedences.iter().find(|p| p.name == name)
    }

    /// Level that owns a binary or unary operator spelling.
    pub fn level_of(&self, operator: &str) -> Option<&PrecedenceLevel> {
        self.precedences
            .iter()
            .find(|p| p.operators.iter().any(|o| o == operator))
    }

    /// Whether `a` and `b` are declared as an accepted conflict.
    pub fn is_conflict(&self, a: &str, b: &str) -> bool {
        self.conflicts
            .iter()
            .any(|group| group.iter().any(|r| r == a) && group.iter().any(|r| r == b))
    }
}
