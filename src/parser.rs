//! Shift-reduce parser with one token of lookahead.
//!
//! After each shifted token the stack is reduced greedily using the following
//! rules, in priority order:
//!
//! ```text
//! literal          --> node
//! NOT node         --> node
//! node AND node    --> node
//! node OR node     --> node, only if lookahead is one of ')', OR, EOF
//! ( node )         --> node
//! ```
//!
//! Deferring the `OR` reduction until its right operand can no longer be
//! extended by a following `AND` is what gives `AND` higher precedence.

// std imports
use std::mem::{replace, take};

// third-party imports
use thiserror::Error;

// local imports
use crate::{
    ast::Node,
    lexer::{Token, TokenSource},
};

// ---

/// Maximum number of tokens accepted by the parser.
pub const MAX_TOKENS: usize = 1000;

/// Maximum number of reductions after a single shift.
pub const MAX_REDUCE_ROUNDS: usize = 100;

// ---

/// Parses tokens into a syntax tree.
///
/// An empty token stream produces a node that matches any text.
pub fn parse<S: TokenSource>(mut tokens: S) -> Result<Node, ParseError> {
    let mut lookahead = tokens.next_token();
    if lookahead == Token::Eof {
        return Ok(Node::any());
    }

    let mut stack = Stack::default();
    for _ in 0..MAX_TOKENS {
        let token = replace(&mut lookahead, tokens.next_token());
        stack.shift(token);
        stack.reduce(&lookahead)?;
        if lookahead == Token::Eof {
            return stack.finish();
        }
    }

    Err(ParseError::TooManyTokens)
}

// ---

/// Error which may occur while parsing tokens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error")]
    Syntax,
    #[error("too many tokens")]
    TooManyTokens,
    #[error("too many reduce rounds")]
    TooManyReduceRounds,
}

// ---

#[derive(Debug)]
enum Item {
    Token(Token),
    Node(Node),
}

#[derive(Default)]
struct Stack {
    items: Vec<Item>,
}

impl Stack {
    fn shift(&mut self, token: Token) {
        log::trace!("shift {}", token);
        self.items.push(Item::Token(token));
    }

    fn reduce(&mut self, lookahead: &Token) -> Result<(), ParseError> {
        for _ in 0..MAX_REDUCE_ROUNDS {
            let reduced = self.reduce_literal()
                || self.reduce_not()
                || self.reduce_and()
                || self.reduce_or(lookahead)
                || self.reduce_group();
            if !reduced {
                return Ok(());
            }
        }

        Err(ParseError::TooManyReduceRounds)
    }

    fn finish(mut self) -> Result<Node, ParseError> {
        match (self.items.pop(), self.items.is_empty()) {
            (Some(Item::Node(node)), true) => Ok(node),
            _ => Err(ParseError::Syntax),
        }
    }

    fn reduce_literal(&mut self) -> bool {
        let Some(item) = self.items.last_mut() else {
            return false;
        };

        let node = match item {
            Item::Token(Token::String(text)) => Node::String(take(text)),
            Item::Token(Token::Regex(text)) => Node::Regex(take(text)),
            _ => return false,
        };
        *item = Item::Node(node);
        true
    }

    fn reduce_not(&mut self) -> bool {
        if !matches!(self.items.as_slice(), [.., Item::Token(Token::Not), Item::Node(_)]) {
            return false;
        }

        let arg = self.pop_node();
        self.items.pop();
        self.items.push(Item::Node(Node::Not(vec![arg])));
        true
    }

    fn reduce_and(&mut self) -> bool {
        if !matches!(
            self.items.as_slice(),
            [.., Item::Node(_), Item::Token(Token::And), Item::Node(_)]
        ) {
            return false;
        }

        let (lhs, rhs) = self.pop_operands();
        self.items.push(Item::Node(Node::And(vec![lhs, rhs])));
        true
    }

    fn reduce_or(&mut self, lookahead: &Token) -> bool {
        if !matches!(lookahead, Token::Close | Token::Or | Token::Eof) {
            return false;
        }

        if !matches!(
            self.items.as_slice(),
            [.., Item::Node(_), Item::Token(Token::Or), Item::Node(_)]
        ) {
            return false;
        }

        let (lhs, rhs) = self.pop_operands();
        self.items.push(Item::Node(Node::Or(vec![lhs, rhs])));
        true
    }

    fn reduce_group(&mut self) -> bool {
        if !matches!(
            self.items.as_slice(),
            [.., Item::Token(Token::Open), Item::Node(_), Item::Token(Token::Close)]
        ) {
            return false;
        }

        self.items.pop();
        let inner = self.pop_node();
        self.items.pop();
        self.items.push(Item::Node(inner));
        true
    }

    // Pops `node op node` from the top of the stack, the shape must be checked by the caller.
    fn pop_operands(&mut self) -> (Node, Node) {
        let rhs = self.pop_node();
        self.items.pop();
        let lhs = self.pop_node();
        (lhs, rhs)
    }

    fn pop_node(&mut self) -> Node {
        match self.items.pop() {
            Some(Item::Node(node)) => node,
            item => unreachable!("expected node on top of the stack, found {:?}", item),
        }
    }
}

// ---
