//! JSON rendering of parsed filter expressions.
//!
//! Renders an AST [`Block`] as a deterministic [`serde_json::Value`] tree,
//! for the CLI's `--ast` output and for snapshot-style assertions in
//! tests. Numbers render as their decimal string so no precision is lost
//! to JSON's float representation.
//!
//! # Examples
//!
//! ```
//! use fexpr::{Lexer, Parser};
//! use fexpr::output::to_json;
//!
//! let mut parser = Parser::new(Lexer::new("2 equals 4"));
//! let block = parser.parse_block().unwrap();
//!
//! assert_eq!(
//!     to_json(&block).to_string(),
//!     r#"{"expression":{"number":"2"},"operations":[{"equals":{"number":"4"}}]}"#,
//! );
//! ```

use crate::ast::{Block, Expr, Op};
use serde_json::{Value, json};

/// Renders a block as a JSON value.
pub fn to_json(block: &Block) -> Value {
    json!({
        "expression": expr_to_json(&block.expression),
        "operations": block.operations.iter().map(op_to_json).collect::<Vec<_>>(),
    })
}

/// Renders a block as a pretty-printed JSON string.
pub fn to_json_pretty(block: &Block) -> String {
    // to_string_pretty on a Value cannot fail.
    serde_json::to_string_pretty(&to_json(block)).unwrap_or_default()
}

fn expr_to_json(expr: &Expr) -> Value {
    match expr {
        Expr::Number(value) => json!({ "number": value.to_string() }),
        Expr::Block(block) => json!({ "block": to_json(block) }),
    }
}

fn op_to_json(op: &Op) -> Value {
    match op {
        Op::Equals(operand) => json!({ "equals": expr_to_json(operand) }),
    }
}
