use crate::ast::Token;
use crate::cursor::RuneCursor;
use thiserror::Error;

/// Errors produced while turning the input into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// The stream is exhausted. This is the structural "no more tokens"
    /// signal, not corruption; the parser relies on it to detect the end
    /// of a block's operation chain.
    #[error("end of input")]
    EndOfInput,

    /// A string literal was opened but the input ended before the closing
    /// quote.
    #[error("unexpected end of input in string literal")]
    UnexpectedEndOfInput,

    /// The character matches no token rule.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
}

/// True for characters that may extend an identifier or keyword run.
fn is_label_rune(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Folds a completed label run into its keyword token, if the whole run
/// case-insensitively matches one. Matching happens only after maximal
/// munch, so `equalsx` stays a label.
fn keyword(text: &str) -> Option<Token> {
    match text.to_lowercase().as_str() {
        "not" => Some(Token::Not),
        "equals" => Some(Token::Equals),
        "contains" => Some(Token::Contains),
        "greater" => Some(Token::Greater),
        "lesser" => Some(Token::Lesser),
        _ => None,
    }
}

/// Rune-by-rune scanner with one-token lookahead.
///
/// A `Lexer` is created per query string and is single use: the cursor
/// only moves forward and there is no reset. `peek_token` buffers at most
/// one token; `get_token` drains the buffer before scanning again.
pub struct Lexer {
    cursor: RuneCursor,
    buffered: Option<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            cursor: RuneCursor::new(input),
            buffered: None,
        }
    }

    /// Returns the next token in the input, consuming it.
    ///
    /// A buffered token from a prior [`peek_token`](Lexer::peek_token) is
    /// returned first, without rescanning. At a clean stream end this
    /// fails with [`LexError::EndOfInput`].
    ///
    /// An invalid character is not consumed: the cursor stays on it and a
    /// repeated call fails identically.
    pub fn get_token(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.buffered.take() {
            return Ok(token);
        }

        loop {
            let ch = self.cursor.peek().ok_or(LexError::EndOfInput)?;

            if ch.is_whitespace() {
                let _ = self.cursor.get();
                continue;
            }

            // Digits win over the general label-rune rule, so a leading
            // digit always starts a number run.
            if ch.is_numeric() {
                return Ok(self.read_number());
            }

            if is_label_rune(ch) {
                return Ok(self.read_label());
            }

            return match ch {
                '"' => {
                    let _ = self.cursor.get();
                    self.read_string_literal()
                }
                '(' => {
                    let _ = self.cursor.get();
                    Ok(Token::OpenParen)
                }
                ')' => {
                    let _ = self.cursor.get();
                    Ok(Token::CloseParen)
                }
                other => Err(LexError::InvalidCharacter(other)),
            };
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// Idempotent: repeated calls with no intervening
    /// [`get_token`](Lexer::get_token) return the same token, and the next
    /// `get_token` returns it exactly once. Errors are not buffered.
    pub fn peek_token(&mut self) -> Result<Token, LexError> {
        if let Some(token) = &self.buffered {
            return Ok(token.clone());
        }

        let token = self.get_token()?;
        self.buffered = Some(token.clone());
        Ok(token)
    }

    /// Scans a maximal run of digit characters. End of input terminates
    /// the run without error.
    fn read_number(&mut self) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.cursor.peek() {
            if !ch.is_numeric() {
                break;
            }
            let _ = self.cursor.get();
            text.push(ch);
        }
        Token::Number(text)
    }

    /// Scans a maximal run of label runes, then folds keywords. End of
    /// input terminates the run without error.
    fn read_label(&mut self) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.cursor.peek() {
            if !is_label_rune(ch) {
                break;
            }
            let _ = self.cursor.get();
            text.push(ch);
        }

        match keyword(&text) {
            Some(token) => token,
            None => Token::Label(text),
        }
    }

    /// Scans a string literal body after the opening quote has been
    /// consumed. Characters are taken verbatim; there is no escape
    /// processing. Unlike number and label runs, running out of input
    /// here is a hard error.
    fn read_string_literal(&mut self) -> Result<Token, LexError> {
        let mut text = String::new();
        loop {
            match self.cursor.get() {
                None => return Err(LexError::UnexpectedEndOfInput),
                Some('"') => return Ok(Token::StringLiteral(text)),
                Some(ch) => text.push(ch),
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("not equals contains greater lesser");
    assert_eq!(lexer.get_token(), Ok(Token::Not));
    assert_eq!(lexer.get_token(), Ok(Token::Equals));
    assert_eq!(lexer.get_token(), Ok(Token::Contains));
    assert_eq!(lexer.get_token(), Ok(Token::Greater));
    assert_eq!(lexer.get_token(), Ok(Token::Lesser));
    assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
}

#[test]
fn test_label_runes() {
    for (ch, expected) in [
        ('1', true),
        ('f', true),
        ('_', true),
        ('$', false),
        ('-', false),
        ('\t', false),
        (' ', false),
    ] {
        assert_eq!(is_label_rune(ch), expected, "failed for {ch:?}");
    }
}
