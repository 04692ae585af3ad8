//! Tokenization of bmatch expressions.
//!
//! The lexer makes a single pass over the characters of an expression and
//! produces the complete token sequence up front, so that any lexical error
//! is reported before parsing starts.

// std imports
use std::{fmt, mem::take, vec};

// third-party imports
use thiserror::Error;

// ---

/// A lexical token of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening parenthesis `(`.
    Open,
    /// Closing parenthesis `)`.
    Close,
    /// Operator keyword `NOT`.
    Not,
    /// Operator keyword `AND`.
    And,
    /// Operator keyword `OR`.
    Or,
    /// Bare word that is not an operator keyword.
    String(String),
    /// Text between a pair of unescaped slashes.
    Regex(String),
    /// End of the token stream.
    Eof,
}

impl Token {
    /// Returns the operator token for an exact, case-sensitive keyword match.
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "NOT" => Some(Self::Not),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Not => write!(f, "NOT"),
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::String(text) => write!(f, "{:?}", text),
            Self::Regex(text) => write!(f, "/{}/", text),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

// ---

/// A source of tokens consumed by the parser.
///
/// Once exhausted, a token source keeps returning [`Token::Eof`].
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<I> TokenSource for I
where
    I: Iterator<Item = Token>,
{
    #[inline]
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or(Token::Eof)
    }
}

// ---

/// Token sequence produced by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens {
    inner: vec::IntoIter<Token>,
}

impl Tokens {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            inner: tokens.into_iter(),
        }
    }
}

impl Iterator for Tokens {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.inner.next()
    }
}

// ---

/// Splits an expression into tokens.
pub fn tokenize(expr: &str) -> Result<Tokens, LexError> {
    Lexer::default().run(expr)
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Neutral,
    Word,
    Regex,
    Escape,
}

#[derive(Default)]
struct Lexer {
    tokens: Vec<Token>,
    buf: String,
    state: State,
}

impl Lexer {
    fn run(mut self, expr: &str) -> Result<Tokens, LexError> {
        for ch in expr.chars() {
            match (self.state, ch) {
                (State::Escape, '/') => {
                    self.buf.push(ch);
                    self.state = State::Regex;
                }
                (State::Escape, _) => {
                    self.buf.push(ch);
                    return Err(LexError::InvalidEscape(take(&mut self.buf)));
                }
                (State::Regex, '/') => {
                    self.tokens.push(Token::Regex(take(&mut self.buf)));
                    self.state = State::Neutral;
                }
                (State::Regex, '\\') => self.state = State::Escape,
                (State::Regex, _) => self.buf.push(ch),
                (_, ' ') => self.end_word(),
                (_, '(') => {
                    self.end_word();
                    self.tokens.push(Token::Open);
                }
                (_, ')') => {
                    self.end_word();
                    self.tokens.push(Token::Close);
                }
                (_, '/') => {
                    self.end_word();
                    self.state = State::Regex;
                }
                _ => {
                    self.buf.push(ch);
                    self.state = State::Word;
                }
            }
        }

        match self.state {
            State::Regex | State::Escape => Err(LexError::UnclosedRegex(self.buf)),
            State::Neutral | State::Word => {
                self.end_word();
                Ok(Tokens::new(self.tokens))
            }
        }
    }

    fn end_word(&mut self) {
        if self.state != State::Word {
            return;
        }

        self.state = State::Neutral;
        let word = take(&mut self.buf);
        let token = Token::keyword(&word).unwrap_or(Token::String(word));
        self.tokens.push(token);
    }
}

// ---

/// Error which may occur while splitting an expression into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A backslash inside a regex literal is followed by anything but a slash.
    #[error("invalid escape sequence in {0:?}")]
    InvalidEscape(String),

    /// The expression ends inside a regex literal.
    #[error("unclosed regex literal in {0:?}")]
    UnclosedRegex(String),
}

// ---

#[cfg(test)]
mod tests;
