//! Boolean expressions over substrings and regular expressions.
//!
//! ```
//! let matcher = bmatch::compile("/fo*bar/ OR (baz AND NOT qux)").unwrap();
//! assert!(matcher.matches("fooobar"));
//! assert!(matcher.matches("baz"));
//! assert!(!matcher.matches("baz qux"));
//! ```

// public modules
pub mod app;
pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod explain;
pub mod input;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod settings;

// public uses
pub use ast::Node;
pub use error::{Error, Result};
pub use matcher::{Compiler, Engine, Matcher, Pattern, RegexEngine};
pub use settings::Settings;

// ---

/// Parses the expression into a syntax tree.
pub fn parse(expr: &str) -> Result<Node> {
    Ok(parser::parse(lexer::tokenize(expr)?)?)
}

/// Compiles the expression into a matcher with default options.
pub fn compile(expr: &str) -> Result<Matcher> {
    Compiler::new().compile(expr)
}

/// Parses the expression and renders its syntax tree, e.g. `OR[/foo/,AND['bar',NOT['baz']]]`.
pub fn explain(expr: &str) -> Result<String> {
    Ok(explain::explain(&parse(expr)?))
}

// ---
