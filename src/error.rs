// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// local imports
use crate::{lexer::LexError, parser::ParseError};

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid regular expression {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("too deep nesting level {0}")]
    TooDeep(usize),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Writes the error and a tip, if there is one, to stderr.
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)?;
        if let Some(tip) = self.tip() {
            writeln!(target, "{} {}", "  tip:".green().bold(), tip)?;
        }
        Ok(())
    }

    /// Returns a hint on how to fix the error.
    pub fn tip(&self) -> Option<String> {
        match self {
            Self::Lex(LexError::InvalidEscape(_)) => Some(format!(
                "the only escape sequence allowed in a regex literal is {}",
                r"\/".bold()
            )),
            Self::Lex(LexError::UnclosedRegex(_)) => Some(format!(
                "close the regex literal with {} or use {} for a literal slash",
                "/".bold(),
                r"\/".bold()
            )),
            Self::TooDeep(_) => Some(format!(
                "simplify the expression or raise the limit with {}",
                "--max-depth".bold()
            )),
            _ => None,
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
