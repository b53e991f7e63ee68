//! Property tests for the scanner over generated input.

use minilua_lex::{scan, scan_lexemes, ReservedWord, Token};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_property_names(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
        let tokens = scan(&input).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        match ReservedWord::from_ident(&input) {
            Some(word) => prop_assert_eq!(&tokens[0], &Token::Reserved(word)),
            None => prop_assert_eq!(&tokens[0], &Token::Name(input.clone())),
        }
    }

    #[test]
    fn test_property_decimal_integers(input in "[0-9]{1,19}") {
        let tokens = scan(&input).unwrap();
        let expected = input.parse::<u64>().unwrap() as f64;
        prop_assert_eq!(tokens, vec![Token::Number(expected), Token::EndOfFile]);
    }

    #[test]
    fn test_property_hex_integers(digits in "[0-9a-fA-F]{1,16}", upper in any::<bool>()) {
        let input = format!("0{}{}", if upper { 'X' } else { 'x' }, digits);
        let tokens = scan(&input).unwrap();
        let expected = u64::from_str_radix(&digits, 16).unwrap() as f64;
        prop_assert_eq!(tokens, vec![Token::Number(expected), Token::EndOfFile]);
    }

    #[test]
    fn test_property_floats(int in "[0-9]{0,6}", frac in "[0-9]{1,6}", exp in -30i32..30) {
        let input = format!("{}.{}e{}", int, frac, exp);
        let tokens = scan(&input).unwrap();
        let expected: f64 = input.parse().unwrap();
        prop_assert_eq!(tokens, vec![Token::Number(expected), Token::EndOfFile]);
    }

    #[test]
    fn test_property_plain_strings(content in "[^'\\\\]{0,80}") {
        let source = format!("'{}'", content);
        let tokens = scan(&source).unwrap();
        prop_assert_eq!(tokens, vec![Token::String(content), Token::EndOfFile]);
    }

    #[test]
    fn test_property_eol_per_newline(lines in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,3}", 0..20)) {
        let source = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
        let eols = scan(&source)
            .unwrap()
            .into_iter()
            .filter(|t| *t == Token::EndOfLine)
            .count();
        prop_assert_eq!(eols, lines.len());
    }

    #[test]
    fn test_property_inline_whitespace_only(input in "[ \t\r\x0b\x0c]{0,50}") {
        prop_assert_eq!(scan(&input).unwrap(), vec![Token::EndOfFile]);
    }

    #[test]
    fn test_property_arbitrary_input_never_panics(input in "\\PC{0,200}") {
        if let Ok(tokens) = scan(&input) {
            prop_assert_eq!(tokens.last(), Some(&Token::EndOfFile));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        }
    }

    #[test]
    fn test_property_lexemes_cover_source_in_order(input in "[a-z0-9 =+*(),.\n'~<>-]{0,200}") {
        if let Ok(lexemes) = scan_lexemes(&input) {
            let mut previous_end = 0;
            for lexeme in &lexemes {
                prop_assert!(lexeme.span.start >= previous_end);
                prop_assert_eq!(&input[lexeme.span.start..lexeme.span.end], lexeme.text);
                previous_end = lexeme.span.end;
            }
            prop_assert_eq!(previous_end, input.len());
        }
    }
}
