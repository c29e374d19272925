use crate::{
    ast::{Block, Expr, Op, Token, TokenKind},
    lexer::{LexError, Lexer},
};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while assembling tokens into an AST.
///
/// Context variants (`Expression`, `Operation`) annotate a failure with
/// the grammar rule that was being parsed while keeping the original
/// cause reachable through `source()`.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The token stream ended cleanly. At the block level this is the
    /// normal "no more operations" signal, not a failure.
    #[error("end of input")]
    EndOfInput,

    /// The lexer failed mid-stream.
    #[error("failed to get token: {0}")]
    Lex(#[source] LexError),

    /// A token kind that no expression rule accepts.
    #[error("unexpected token: {0}")]
    UnexpectedToken(TokenKind),

    /// A token kind that no operation rule accepts. Reserved keywords
    /// (`not`, `contains`, `greater`, `lesser`) land here until their
    /// grammar rules exist.
    #[error("unsupported token: {0}")]
    UnsupportedToken(TokenKind),

    /// The digit text of a number token does not form a valid decimal.
    /// The lexer only emits digit runs, so this is defensive; it matters
    /// once the number rule grows signs or fractions.
    #[error("malformed number {text:?}: {source}")]
    MalformedNumber {
        text: String,
        source: rust_decimal::Error,
    },

    /// Failure while parsing an expression, with the cause attached.
    #[error("failed to parse expression: {0}")]
    Expression(#[source] Box<ParseError>),

    /// Failure while parsing an operation, with the cause attached.
    #[error("failed to parse operation: {0}")]
    Operation(#[source] Box<ParseError>),
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        // A clean stream end stays distinguishable from genuine lexer
        // failures; the block loop terminates on it.
        match err {
            LexError::EndOfInput => ParseError::EndOfInput,
            other => ParseError::Lex(other),
        }
    }
}

/// Recursive-descent parser over one token stream.
///
/// Grammar:
///
/// ```text
/// Block      := Expression Operation*
/// Operation  := "equals" Expression
/// Expression := Number
/// ```
///
/// A `Parser` wraps one [`Lexer`] and, like it, is single use per query.
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer }
    }

    /// Parses the next block: a base expression followed by operations
    /// until the stream ends.
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        let expression = self
            .parse_expression()
            .map_err(|e| ParseError::Expression(Box::new(e)))?;

        let mut operations = Vec::new();
        loop {
            match self.parse_operation() {
                Ok(operation) => operations.push(operation),
                Err(ParseError::EndOfInput) => break,
                Err(e) => return Err(ParseError::Operation(Box::new(e))),
            }
        }

        Ok(Block {
            expression,
            operations,
        })
    }

    /// Parses the next operation. `EndOfInput` propagates unwrapped so
    /// the block loop can tell "stream done" from a real failure.
    pub fn parse_operation(&mut self) -> Result<Op, ParseError> {
        let token = self.lexer.get_token()?;

        match token {
            Token::Equals => self.parse_equals(),
            other => Err(ParseError::UnsupportedToken(other.kind())),
        }
    }

    /// Parses the operand of an `equals` operation, the keyword itself
    /// having already been consumed.
    fn parse_equals(&mut self) -> Result<Op, ParseError> {
        let operand = self
            .parse_expression()
            .map_err(|e| ParseError::Expression(Box::new(e)))?;

        Ok(Op::Equals(operand))
    }

    /// Parses the next expression.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let token = self.lexer.get_token()?;

        match token {
            Token::Number(text) => parse_number(&text),
            other => Err(ParseError::UnexpectedToken(other.kind())),
        }
    }
}

/// Converts the digit text of a number token into a number node. The
/// decimal parse is lossless; no float rounding.
fn parse_number(text: &str) -> Result<Expr, ParseError> {
    let value = Decimal::from_str(text).map_err(|source| ParseError::MalformedNumber {
        text: text.to_string(),
        source,
    })?;

    Ok(Expr::Number(value))
}
