use crate::ast::{Token, TokenKind};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Errors from interning token text into a [`ValueHolder`].
#[derive(Debug, Error)]
pub enum ValueError {
    /// The text does not form a valid decimal.
    #[error("invalid decimal {text:?}: {source}")]
    InvalidDecimal {
        text: String,
        source: rust_decimal::Error,
    },

    /// The token kind has no value representation.
    #[error("unsupported token: {0}")]
    UnsupportedToken(TokenKind),
}

/// A handle into a [`ValueHolder`]. Copyable and cheap; meaningless
/// without the holder that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// An interned decimal number.
    Number(usize),
}

impl Value {
    /// The arena key this handle refers to.
    pub fn key(&self) -> usize {
        match self {
            Value::Number(key) => *key,
        }
    }
}

/// Append-only arena of decoded decimal values.
///
/// Keys are dense and monotonic from 0 and never reused or removed, so
/// the table is a plain vector indexed by key. The holder outlives any
/// single parse and is owned by whoever owns the eventual evaluator;
/// sharing it across threads is the owner's synchronization problem.
#[derive(Debug, Default)]
pub struct ValueHolder {
    numbers: Vec<Decimal>,
}

impl ValueHolder {
    pub fn new() -> Self {
        ValueHolder::default()
    }

    /// Interns a lexed token's text, dispatching on its kind. Only
    /// number tokens carry internable values today.
    pub fn put_token(&mut self, token: &Token) -> Result<Value, ValueError> {
        match token {
            Token::Number(text) => self.put_number_value(text),
            other => Err(ValueError::UnsupportedToken(other.kind())),
        }
    }

    /// Parses `text` as a decimal and appends it, returning the handle.
    pub fn put_number_value(&mut self, text: &str) -> Result<Value, ValueError> {
        let number = Decimal::from_str(text).map_err(|source| ValueError::InvalidDecimal {
            text: text.to_string(),
            source,
        })?;

        let key = self.numbers.len();
        self.numbers.push(number);
        Ok(Value::Number(key))
    }

    /// Looks up an interned number by key.
    pub fn get_number_value(&self, key: usize) -> Option<Decimal> {
        self.numbers.get(key).copied()
    }
}
