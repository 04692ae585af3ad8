//! Human-readable rendering of syntax trees.
//!
//! Literal strings are rendered as `'text'`, regular expressions as `/text/`
//! and operators as `OP[child,child,...]`, for example
//! `OR[/foo/,AND[/bar/,NOT[/bill/]]]`.

// std imports
use std::fmt;

// local imports
use crate::ast::Node;

// ---

/// Renders the syntax tree as a string.
pub fn explain(node: &Node) -> String {
    Explained(node).to_string()
}

// ---

/// Display adapter rendering a syntax tree.
pub struct Explained<'a>(pub &'a Node);

impl fmt::Display for Explained<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Node::String(text) => write!(f, "'{}'", text),
            Node::Regex(text) => write!(f, "/{}/", text),
            node => {
                if let Some(op) = node.operator() {
                    write!(f, "{}", op)?;
                }
                write_children(f, node.children())
            }
        }
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Node]) -> fmt::Result {
    if children.is_empty() {
        return Ok(());
    }

    write!(f, "[")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        fmt::Display::fmt(&Explained(child), f)?;
    }
    write!(f, "]")
}

// ---
