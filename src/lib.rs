pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod cursor;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Block, Expr, Op, Token, TokenKind};
pub use cursor::RuneCursor;
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use value::{Value, ValueError, ValueHolder};
