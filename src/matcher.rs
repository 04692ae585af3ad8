//! Compiled matchers.
//!
//! A [`Matcher`] is an immutable tree built from a syntax tree by a [`Compiler`].
//! Regular expression literals are compiled by a pluggable [`Engine`],
//! which is [`RegexEngine`] unless specified otherwise.

// std imports
use std::{fmt, ops, str::FromStr};

// third-party imports
use memchr::memmem::Finder;
use regex::Regex;

// local imports
use crate::{
    ast::Node,
    error::{Error, Result},
};

// ---

/// Default maximum nesting level of a syntax tree accepted by the [`Compiler`].
pub const DEFAULT_MAX_DEPTH: usize = 20;

// ---

/// A compiled pattern that can be tested against text.
pub trait Pattern {
    /// Returns `true` if the pattern matches anywhere in the text.
    fn is_match(&self, text: &str) -> bool;
}

impl Pattern for Regex {
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        Regex::is_match(self, text)
    }
}

/// A pattern engine compiling regular expression literals.
pub trait Engine {
    type Pattern: Pattern;
    type Error: std::error::Error + Send + Sync + 'static;

    fn compile(&self, pattern: &str) -> std::result::Result<Self::Pattern, Self::Error>;
}

/// Engine backed by the [`regex`] crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEngine;

impl Engine for RegexEngine {
    type Pattern = Regex;
    type Error = regex::Error;

    fn compile(&self, pattern: &str) -> std::result::Result<Regex, regex::Error> {
        Regex::new(pattern)
    }
}

// ---

/// A compiled expression that tells whether a text matches.
#[derive(Debug, Clone)]
pub enum Matcher<P = Regex> {
    /// Matches if the text contains the substring.
    Substring(Substring),
    /// Matches if the pattern matches anywhere in the text.
    Pattern(P),
    /// Matches if none of the children match.
    Not(Vec<Matcher<P>>),
    /// Matches if all of the children match.
    And(Vec<Matcher<P>>),
    /// Matches if at least one of the children matches.
    Or(Vec<Matcher<P>>),
}

impl<P: Pattern> Matcher<P> {
    /// Tests whether the text matches.
    ///
    /// Children are evaluated left to right and evaluation stops as soon as the result is known.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Substring(substring) => substring.matches(text),
            Self::Pattern(pattern) => pattern.is_match(text),
            Self::Not(children) => !children.iter().any(|child| child.matches(text)),
            Self::And(children) => children.iter().all(|child| child.matches(text)),
            Self::Or(children) => children.iter().any(|child| child.matches(text)),
        }
    }
}

impl<P> Matcher<P> {
    /// Combines two matchers so that both must match.
    pub fn and(self, rhs: Self) -> Self {
        Self::And(vec![self, rhs])
    }

    /// Combines two matchers so that at least one must match.
    pub fn or(self, rhs: Self) -> Self {
        Self::Or(vec![self, rhs])
    }
}

impl<P> ops::Not for Matcher<P> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(vec![self])
    }
}

impl<P> ops::BitAnd for Matcher<P> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<P> ops::BitOr for Matcher<P> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl FromStr for Matcher {
    type Err = Error;

    fn from_str(expr: &str) -> Result<Self> {
        Compiler::new().compile(expr)
    }
}

// ---

/// Substring search with a precompiled searcher.
#[derive(Clone)]
pub struct Substring {
    needle: String,
    finder: Finder<'static>,
}

impl Substring {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_owned(),
            finder: Finder::new(needle).into_owned(),
        }
    }

    /// Returns `true` if the text contains the needle, an empty needle is contained in any text.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.finder.find(text.as_bytes()).is_some()
    }
}

impl fmt::Debug for Substring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Substring").field(&self.needle).finish()
    }
}

// ---

/// Builds matchers from expressions or syntax trees.
#[derive(Debug, Clone)]
pub struct Compiler<E = RegexEngine> {
    engine: E,
    max_depth: usize,
}

impl Compiler {
    /// Creates a compiler using [`RegexEngine`] and [`DEFAULT_MAX_DEPTH`].
    pub fn new() -> Self {
        Self {
            engine: RegexEngine,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Compiler<E> {
    /// Replaces the engine used for regular expression literals.
    pub fn with_engine<E2: Engine>(self, engine: E2) -> Compiler<E2> {
        Compiler {
            engine,
            max_depth: self.max_depth,
        }
    }

    /// Sets the maximum nesting level of the syntax tree.
    pub fn max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Parses the expression and builds a matcher.
    pub fn compile(&self, expr: &str) -> Result<Matcher<E::Pattern>> {
        let node = crate::parse(expr)?;
        log::debug!("compile {:?} as {} with depth {}", expr, node, node.depth());
        self.build(&node)
    }

    /// Builds a matcher from the syntax tree.
    pub fn build(&self, node: &Node) -> Result<Matcher<E::Pattern>> {
        self.build_at(0, node)
    }

    fn build_at(&self, level: usize, node: &Node) -> Result<Matcher<E::Pattern>> {
        if level > self.max_depth {
            return Err(Error::TooDeep(level));
        }

        let children = |nodes: &[Node]| {
            nodes
                .iter()
                .map(|node| self.build_at(level + 1, node))
                .collect::<Result<Vec<_>>>()
        };

        Ok(match node {
            Node::String(text) => Matcher::Substring(Substring::new(text)),
            Node::Regex(text) => Matcher::Pattern(self.engine.compile(text).map_err(|e| Error::Pattern {
                pattern: text.clone(),
                source: Box::new(e),
            })?),
            Node::Not(nodes) => Matcher::Not(children(nodes)?),
            Node::And(nodes) => Matcher::And(children(nodes)?),
            Node::Or(nodes) => Matcher::Or(children(nodes)?),
        })
    }
}

// ---
