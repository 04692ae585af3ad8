//! Abstract syntax tree of bmatch expressions.

// std imports
use std::fmt;

// third-party imports
use strum::AsRefStr;

// local imports
use crate::explain::Explained;

// ---

/// A node of the syntax tree.
///
/// Literal nodes are leaves. Operator nodes own their operands in order.
/// The parser always produces exactly one operand for [`Node::Not`] and
/// exactly two for [`Node::And`] and [`Node::Or`], but consumers accept any number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Substring literal.
    String(String),
    /// Regular expression literal.
    Regex(String),
    /// Matches if none of the operands match.
    Not(Vec<Node>),
    /// Matches if all of the operands match.
    And(Vec<Node>),
    /// Matches if any of the operands match.
    Or(Vec<Node>),
}

impl Node {
    /// Node that matches any text.
    pub fn any() -> Self {
        Self::String(String::new())
    }

    /// Returns the operator of the node, if it is not a literal.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::String(_) | Self::Regex(_) => None,
            Self::Not(_) => Some(Operator::Not),
            Self::And(_) => Some(Operator::And),
            Self::Or(_) => Some(Operator::Or),
        }
    }

    /// Returns the operands of the node, empty for literals.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::String(_) | Self::Regex(_) => &[],
            Self::Not(children) | Self::And(children) | Self::Or(children) => children,
        }
    }

    /// Returns the maximum nesting depth of the tree, a single literal has depth 0.
    pub fn depth(&self) -> usize {
        self.children().iter().map(|child| child.depth() + 1).max().unwrap_or(0)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Explained(self), f)
    }
}

// ---

/// Logical operator of a non-literal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Operator {
    Not,
    And,
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

// ---
