use std::fmt;

/// A classified lexical unit of a filter expression.
///
/// Text payloads exist only where the content matters: number and label
/// runs and the body of a string literal. Keywords and parentheses are
/// bare — a `Label` whose lowercased text matches a reserved keyword is
/// folded into the keyword variant by the lexer, so the parser never sees
/// keyword text as a `Label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Maximal run of digit characters
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 007
    /// ```
    Number(String),

    /// Identifier: a letter, digit, or underscore run that is not a keyword
    ///
    /// # Examples
    /// ```text
    /// user_name
    /// equalsx
    /// ```
    Label(String),

    /// Double-quoted string literal, quotes excluded, no escape processing
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "item #1"
    /// ```
    StringLiteral(String),

    /// `not` keyword (reserved, no grammar rule yet)
    Not,

    /// `equals` keyword
    Equals,

    /// `contains` keyword (reserved, no grammar rule yet)
    Contains,

    /// `greater` keyword (reserved, no grammar rule yet)
    Greater,

    /// `lesser` keyword (reserved, no grammar rule yet)
    Lesser,

    /// Left parenthesis for grouping
    OpenParen,

    /// Right parenthesis
    CloseParen,
}

impl Token {
    /// The payload-free classification of this token, for diagnostics.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Label(_) => TokenKind::Label,
            Token::StringLiteral(_) => TokenKind::StringLiteral,
            Token::Not => TokenKind::Not,
            Token::Equals => TokenKind::Equals,
            Token::Contains => TokenKind::Contains,
            Token::Greater => TokenKind::Greater,
            Token::Lesser => TokenKind::Lesser,
            Token::OpenParen => TokenKind::OpenParen,
            Token::CloseParen => TokenKind::CloseParen,
        }
    }

    /// The text payload, if this token kind carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Number(s) | Token::Label(s) | Token::StringLiteral(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{}({:?})", self.kind(), text),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// Token classification without payloads.
///
/// `Undefined` is the reserved zero kind; the lexer never produces it, but
/// it keeps diagnostics total over uninitialized token slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenKind {
    #[default]
    Undefined,
    Number,
    Label,
    StringLiteral,
    Not,
    Equals,
    Contains,
    Greater,
    Lesser,
    OpenParen,
    CloseParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Undefined => "Undefined",
            TokenKind::Number => "Number",
            TokenKind::Label => "Label",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Not => "Not",
            TokenKind::Equals => "Equals",
            TokenKind::Contains => "Contains",
            TokenKind::Greater => "Greater",
            TokenKind::Lesser => "Lesser",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
        };
        f.write_str(name)
    }
}
