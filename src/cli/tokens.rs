//! Dump the token stream of a query, one token per line.

use super::CliError;
use crate::{LexError, Lexer};

/// Lexes the whole query and returns the display form of each token.
///
/// Stops cleanly at end of input; any other lexer failure is reported
/// after the tokens that were already produced have been dropped, so a
/// bad query yields the error alone.
pub fn dump_tokens(query: &str) -> Result<Vec<String>, CliError> {
    let mut lexer = Lexer::new(query);
    let mut lines = Vec::new();

    loop {
        match lexer.get_token() {
            Ok(token) => lines.push(token.to_string()),
            Err(LexError::EndOfInput) => return Ok(lines),
            Err(e) => return Err(CliError::Lex(e)),
        }
    }
}
