//! Name and reserved word lexing.

use crate::chars::is_name_continue;
use crate::scanner::Scanner;
use crate::token::{ReservedWord, Token};

impl<'a> Scanner<'a> {
    /// Lexes an identifier whose first character has been consumed.
    ///
    /// Exact, case-sensitive matches against the reserved word table become
    /// `Token::Reserved`; everything else is a `Token::Name`.
    pub(super) fn lex_name(&mut self) -> Token {
        self.cursor.eat_while(is_name_continue);
        let text = self.cursor.slice_from(self.token_start);

        match ReservedWord::from_ident(text) {
            Some(word) => Token::Reserved(word),
            None => Token::Name(text.to_string()),
        }
    }
}
