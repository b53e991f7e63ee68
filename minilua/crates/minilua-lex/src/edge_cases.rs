//! Edge case tests for minilua-lex

#[cfg(test)]
mod tests {
    use crate::{scan, ReservedWord, ScanError, ScanErrorKind, Scanner, Symbol, Token};

    fn name(s: &str) -> Token {
        Token::Name(s.to_string())
    }

    fn sym(symbol: Symbol) -> Token {
        Token::Symbol(symbol)
    }

    fn err_kind(source: &str) -> ScanErrorKind {
        scan(source).unwrap_err().kind()
    }

    // ==================== WHITESPACE ====================

    #[test]
    fn test_edge_crlf_line_endings() {
        assert_eq!(
            scan("a\r\nb\r\n").unwrap(),
            vec![name("a"), Token::EndOfLine, name("b"), Token::EndOfLine, Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_tabs_and_form_feeds() {
        assert_eq!(
            scan("\ta\x0c=\x0b1").unwrap(),
            vec![name("a"), sym(Symbol::Assign), Token::Number(1.0), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_leading_bom() {
        assert_eq!(scan("\u{FEFF}x").unwrap(), vec![name("x"), Token::EndOfFile]);
        let x = Scanner::new("\u{FEFF}x").next_lexeme().unwrap();
        assert_eq!((x.span.start, x.span.line, x.span.column), (3, 1, 1));
    }

    #[test]
    fn test_edge_bom_elsewhere_is_invalid() {
        assert_eq!(err_kind("x\u{FEFF}"), ScanErrorKind::InvalidCharacter);
    }

    #[test]
    fn test_edge_blank_lines() {
        assert_eq!(
            scan("\n\n").unwrap(),
            vec![Token::EndOfLine, Token::EndOfLine, Token::EndOfFile]
        );
    }

    // ==================== COMMENTS ====================

    #[test]
    fn test_edge_empty_comment_line() {
        assert_eq!(scan("--\n").unwrap(), vec![Token::EndOfFile]);
    }

    #[test]
    fn test_edge_trailing_then_full_line_comment() {
        assert_eq!(
            scan("x --c\n--d\ny").unwrap(),
            vec![name("x"), Token::EndOfLine, name("y"), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_comment_with_non_ascii() {
        assert_eq!(
            scan("-- ünïcode ✓\nx").unwrap(),
            vec![name("x"), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_separated_minus_signs() {
        assert_eq!(
            scan("a - -b").unwrap(),
            vec![name("a"), sym(Symbol::Minus), sym(Symbol::Minus), name("b"), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_double_minus_is_comment() {
        assert_eq!(
            scan("a--b\n").unwrap(),
            vec![name("a"), Token::EndOfLine, Token::EndOfFile]
        );
    }

    // ==================== OPERATORS ====================

    #[test]
    fn test_edge_adjacent_comparisons() {
        assert_eq!(
            scan("<=>").unwrap(),
            vec![sym(Symbol::LessEqual), sym(Symbol::Greater), Token::EndOfFile]
        );
        assert_eq!(
            scan("===").unwrap(),
            vec![sym(Symbol::Equal), sym(Symbol::Assign), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_four_dots() {
        assert_eq!(
            scan("....").unwrap(),
            vec![sym(Symbol::Ellipsis), sym(Symbol::Dot), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_field_access_vs_number() {
        assert_eq!(
            scan("t.x").unwrap(),
            vec![name("t"), sym(Symbol::Dot), name("x"), Token::EndOfFile]
        );
        assert_eq!(
            scan("t.5").unwrap(),
            vec![name("t"), Token::Number(0.5), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_tilde_at_end() {
        assert_eq!(err_kind("x ~"), ScanErrorKind::InvalidCharacter);
    }

    // ==================== NUMBERS ====================

    #[test]
    fn test_edge_number_then_concat() {
        assert_eq!(err_kind("3..4"), ScanErrorKind::InvalidNumber);
        assert_eq!(
            scan("3 .. 4").unwrap(),
            vec![Token::Number(3.0), sym(Symbol::Concat), Token::Number(4.0), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_subtraction_without_spaces() {
        assert_eq!(
            scan("1-1").unwrap(),
            vec![Token::Number(1.0), sym(Symbol::Minus), Token::Number(1.0), Token::EndOfFile]
        );
    }

    #[test]
    fn test_edge_number_before_paren() {
        assert_eq!(
            scan("f(0x10)").unwrap(),
            vec![
                name("f"),
                sym(Symbol::LeftParen),
                Token::Number(16.0),
                sym(Symbol::RightParen),
                Token::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_edge_number_touching_name() {
        assert_eq!(
            scan("5.x").unwrap(),
            vec![Token::Number(5.0), name("x"), Token::EndOfFile]
        );
        assert_eq!(
            scan("12x = 1").unwrap(),
            vec![
                Token::Number(12.0),
                name("x"),
                sym(Symbol::Assign),
                Token::Number(1.0),
                Token::EndOfFile,
            ]
        );
        // `e` starts an exponent that never gets its digits.
        assert_eq!(err_kind("1end"), ScanErrorKind::InvalidNumber);
    }

    // ==================== NAMES ====================

    #[test]
    fn test_edge_long_identifier() {
        let long = "a".repeat(10000);
        let tokens = scan(&format!("local {} = 1", long)).unwrap();
        assert_eq!(tokens[0], Token::Reserved(ReservedWord::Local));
        assert_eq!(tokens[1], Token::Name(long));
    }

    #[test]
    fn test_edge_keywords_glued_by_symbols() {
        assert_eq!(
            scan("if(x)then").unwrap(),
            vec![
                Token::Reserved(ReservedWord::If),
                sym(Symbol::LeftParen),
                name("x"),
                sym(Symbol::RightParen),
                Token::Reserved(ReservedWord::Then),
                Token::EndOfFile,
            ]
        );
    }

    // ==================== FAILURES ====================

    #[test]
    fn test_edge_nul_byte() {
        assert_eq!(err_kind("\0"), ScanErrorKind::InvalidCharacter);
    }

    #[test]
    fn test_edge_tokens_before_error_are_delivered() {
        let mut scanner = Scanner::new("a b $ c");
        assert_eq!(scanner.next_token(), Ok(name("a")));
        assert_eq!(scanner.next_token(), Ok(name("b")));
        assert!(matches!(
            scanner.next_token(),
            Err(ScanError::InvalidCharacter { found: '$', .. })
        ));
    }

    #[test]
    fn test_edge_error_is_sticky() {
        let mut scanner = Scanner::new("'open");
        let first = scanner.next_token().unwrap_err();
        for _ in 0..3 {
            assert_eq!(scanner.next_token(), Err(first.clone()));
        }
    }

    #[test]
    fn test_edge_error_display() {
        let err = scan("x = 1.2.3").unwrap_err();
        assert_eq!(err.to_string(), "malformed number \"1.2\" near '.' at 1:8");
        let err = scan("\n  'abc").unwrap_err();
        assert_eq!(err.to_string(), "unterminated string starting at 2:3");
    }
}
