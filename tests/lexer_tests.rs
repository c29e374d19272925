// tests/lexer_tests.rs

use fexpr::ast::Token;
use fexpr::lexer::{LexError, Lexer};

// ============================================================================
// Structural Tokens
// ============================================================================

#[test]
fn test_parens() {
    let test_cases = vec![("(", Token::OpenParen), (")", Token::CloseParen)];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.get_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
    }
}

#[test]
fn test_paren_group() {
    let mut lexer = Lexer::new("(42)");
    assert_eq!(lexer.get_token().unwrap(), Token::OpenParen);
    assert_eq!(lexer.get_token().unwrap(), Token::Number("42".to_string()));
    assert_eq!(lexer.get_token().unwrap(), Token::CloseParen);
    assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_number_runs() {
    // A digit-only input is always exactly one Number token whose text
    // equals the input, whatever the run length.
    let test_cases = vec!["0", "7", "42", "007", "123456789123456789123456789"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.get_token().unwrap();
        assert_eq!(
            token,
            Token::Number(input.to_string()),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
    }
}

#[test]
fn test_number_stops_at_non_digit() {
    let mut lexer = Lexer::new("12(");
    assert_eq!(lexer.get_token().unwrap(), Token::Number("12".to_string()));
    assert_eq!(lexer.get_token().unwrap(), Token::OpenParen);
}

#[test]
fn test_leading_digit_starts_a_number_not_a_label() {
    // Digit classification wins over the general label-rune rule, so a
    // run starting with a digit splits at the first letter.
    let mut lexer = Lexer::new("2x");
    assert_eq!(lexer.get_token().unwrap(), Token::Number("2".to_string()));
    assert_eq!(lexer.get_token().unwrap(), Token::Label("x".to_string()));
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn test_whitespace_insensitivity() {
    let test_cases = vec!["123", "  123", "123  ", "  123  ", "\t\n123\r\n"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.get_token().unwrap();
        assert_eq!(
            token,
            Token::Number("123".to_string()),
            "Failed for input: {:?}",
            input
        );
        assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
    }
}

#[test]
fn test_whitespace_only_input_is_end_of_input() {
    let test_cases = vec!["", " ", "   \t\n  "];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.get_token(),
            Err(LexError::EndOfInput),
            "Failed for input: {:?}",
            input
        );
    }
}

// ============================================================================
// Labels and Keywords
// ============================================================================

#[test]
fn test_keywords() {
    let test_cases = vec![
        ("not", Token::Not),
        ("equals", Token::Equals),
        ("contains", Token::Contains),
        ("greater", Token::Greater),
        ("lesser", Token::Lesser),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.get_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
    }
}

#[test]
fn test_keywords_are_case_insensitive() {
    let test_cases = vec!["equals", "Equals", "EQUALS", "eQuAlS"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.get_token().unwrap(),
            Token::Equals,
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_keyword_match_is_whole_run_only() {
    // Maximal munch runs first; only an exact whole-run match folds into
    // a keyword.
    let test_cases = vec!["equalsx", "notnot", "xcontains", "greater_", "lesser1"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.get_token().unwrap(),
            Token::Label(input.to_string()),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_labels() {
    let test_cases = vec!["user", "user_name", "_internal", "a1b2"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.get_token().unwrap(),
            Token::Label(input.to_string()),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
    }
}

// ============================================================================
// String Literals
// ============================================================================

#[test]
fn test_string_literals() {
    let test_cases = vec![
        (r#""hello""#, "hello"),
        (r#""""#, ""),
        (r#""item #1""#, "item #1"),
        (r#""spaces inside  ""#, "spaces inside  "),
        // No escape processing: a backslash is just a character.
        (r#""a\nb""#, r"a\nb"),
        // A lexed keyword string stays a literal.
        (r#""not""#, "not"),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.get_token().unwrap(),
            Token::StringLiteral(expected.to_string()),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
    }
}

#[test]
fn test_unterminated_string_literal() {
    let test_cases = vec![r#"""#, r#""hello "#, r#"123 "tail"#];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        loop {
            match lexer.get_token() {
                Ok(_) => continue,
                Err(e) => {
                    assert_eq!(
                        e,
                        LexError::UnexpectedEndOfInput,
                        "Failed for input: {}",
                        input
                    );
                    break;
                }
            }
        }
    }
}

// ============================================================================
// Invalid Characters
// ============================================================================

#[test]
fn test_invalid_character() {
    let mut lexer = Lexer::new("123 `");
    assert_eq!(lexer.get_token().unwrap(), Token::Number("123".to_string()));

    let err = lexer.get_token().unwrap_err();
    assert_eq!(err, LexError::InvalidCharacter('`'));
}

#[test]
fn test_invalid_character_is_not_consumed() {
    // The offending character is only inspected, never consumed, so the
    // failure repeats deterministically.
    let mut lexer = Lexer::new("$");
    for _ in 0..3 {
        assert_eq!(lexer.get_token(), Err(LexError::InvalidCharacter('$')));
    }
}

#[test]
fn test_invalid_characters() {
    let test_cases = vec!['`', '$', '-', '+', '.', ',', '!', '='];

    for ch in test_cases {
        let mut lexer = Lexer::new(&ch.to_string());
        assert_eq!(
            lexer.get_token(),
            Err(LexError::InvalidCharacter(ch)),
            "Failed for input: {}",
            ch
        );
    }
}

// ============================================================================
// Lookahead
// ============================================================================

#[test]
fn test_peek_is_idempotent() {
    let mut lexer = Lexer::new("42 equals");

    for _ in 0..5 {
        assert_eq!(
            lexer.peek_token().unwrap(),
            Token::Number("42".to_string())
        );
    }

    // The buffered token drains exactly once.
    assert_eq!(lexer.get_token().unwrap(), Token::Number("42".to_string()));
    assert_eq!(lexer.get_token().unwrap(), Token::Equals);
    assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
}

#[test]
fn test_peek_then_get_does_not_rescan() {
    let mut lexer = Lexer::new("1 2");
    assert_eq!(lexer.peek_token().unwrap(), Token::Number("1".to_string()));
    assert_eq!(lexer.get_token().unwrap(), Token::Number("1".to_string()));
    assert_eq!(lexer.peek_token().unwrap(), Token::Number("2".to_string()));
    assert_eq!(lexer.get_token().unwrap(), Token::Number("2".to_string()));
    assert_eq!(lexer.peek_token(), Err(LexError::EndOfInput));
}

#[test]
fn test_peek_at_end_of_input() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.peek_token(), Err(LexError::EndOfInput));
    assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
}

// ============================================================================
// Full Streams
// ============================================================================

#[test]
fn test_query_token_stream() {
    let mut lexer = Lexer::new("2 equals 4");
    assert_eq!(lexer.get_token().unwrap(), Token::Number("2".to_string()));
    assert_eq!(lexer.get_token().unwrap(), Token::Equals);
    assert_eq!(lexer.get_token().unwrap(), Token::Number("4".to_string()));
    assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
}

#[test]
fn test_string_literal_query_stream() {
    let mut lexer = Lexer::new(r#""not" contains "x""#);
    assert_eq!(
        lexer.get_token().unwrap(),
        Token::StringLiteral("not".to_string())
    );
    assert_eq!(lexer.get_token().unwrap(), Token::Contains);
    assert_eq!(
        lexer.get_token().unwrap(),
        Token::StringLiteral("x".to_string())
    );
    assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
}

#[test]
fn test_adjacent_tokens_without_whitespace() {
    let mut lexer = Lexer::new(r#"(1)equals"2""#);
    assert_eq!(lexer.get_token().unwrap(), Token::OpenParen);
    assert_eq!(lexer.get_token().unwrap(), Token::Number("1".to_string()));
    assert_eq!(lexer.get_token().unwrap(), Token::CloseParen);
    assert_eq!(lexer.get_token().unwrap(), Token::Equals);
    assert_eq!(
        lexer.get_token().unwrap(),
        Token::StringLiteral("2".to_string())
    );
    assert_eq!(lexer.get_token(), Err(LexError::EndOfInput));
}
