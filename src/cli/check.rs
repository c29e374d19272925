//! Parse fexpr queries and report syntax validity or the AST.

use super::CliError;
use crate::{Lexer, Parser, output};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The fexpr query to parse
    pub query: String,
    /// Print the parsed AST instead of just validating
    pub ast: bool,
    /// Pretty-print the AST output
    pub pretty: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The parsed AST as JSON
    Ast(serde_json::Value),
}

/// Parse a query and report its validity or its AST.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let lexer = Lexer::new(&options.query);
    let mut parser = Parser::new(lexer);

    let block = parser.parse_block().map_err(CliError::Parse)?;

    if options.ast {
        Ok(CheckResult::Ast(output::to_json(&block)))
    } else {
        Ok(CheckResult::SyntaxValid)
    }
}
