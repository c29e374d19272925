//! CLI support for fexpr
//!
//! Provides programmatic access to fexpr CLI functionality for embedding
//! in other tools.

mod check;
mod tokens;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use tokens::dump_tokens;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Lexer error
    Lex(crate::LexError),
    /// Parser error
    Parse(crate::ParseError),
    /// IO error
    Io(io::Error),
    /// No query provided
    NoQuery,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Lex(e) => write!(f, "Lex error: {}", e),
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoQuery => write!(f, "No query provided. Pass it as an argument or pipe it to stdin."),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Lex(e) => Some(e),
            CliError::Parse(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoQuery => None,
        }
    }
}

impl From<crate::LexError> for CliError {
    fn from(e: crate::LexError) -> Self {
        CliError::Lex(e)
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
