//! Token definitions for MiniLua.
//!
//! [`Token`] is a closed sum type: every consumer matches it exhaustively, so
//! adding a variant is a compile error at every site that needs updating.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One lexical unit of MiniLua source.
///
/// Comments never appear here; they are discarded by the scanner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// One of the fixed keywords
    Reserved(ReservedWord),
    /// Any numeric literal, always widened to `f64`
    Number(f64),
    /// Quoted literal with escapes resolved (quotes not included)
    String(String),
    /// Operator or punctuation
    Symbol(Symbol),
    /// Identifier that is not a reserved word
    Name(String),
    /// A newline in the source; the language is line-sensitive
    EndOfLine,
    /// Terminal marker, produced exactly once per scan
    EndOfFile,
}

impl Token {
    /// Returns the rendering tag for this token.
    pub fn tag(&self) -> TokenTag {
        match self {
            Token::Reserved(_) => TokenTag::Reserved,
            Token::Number(_) => TokenTag::Number,
            Token::String(_) => TokenTag::String,
            Token::Symbol(_) => TokenTag::Symbol,
            Token::Name(_) => TokenTag::Name,
            Token::EndOfLine => TokenTag::Eol,
            Token::EndOfFile => TokenTag::Eof,
        }
    }

    /// Returns true for the terminal marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::EndOfFile)
    }
}

/// Payload-free classification of a [`Token`], used by listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenTag {
    /// `[RESERVED]`
    Reserved,
    /// `[NUMBER]`
    Number,
    /// `[STRING]`
    String,
    /// `[SYMBOL]`
    Symbol,
    /// `[NAME]`
    Name,
    /// `[EOL]`
    Eol,
    /// `[EOF]`, never printed by the reference listing
    Eof,
}

impl TokenTag {
    /// Bracketed label used by the token listing.
    pub const fn label(&self) -> &'static str {
        match self {
            TokenTag::Reserved => "[RESERVED]",
            TokenTag::Number => "[NUMBER]",
            TokenTag::String => "[STRING]",
            TokenTag::Symbol => "[SYMBOL]",
            TokenTag::Name => "[NAME]",
            TokenTag::Eol => "[EOL]",
            TokenTag::Eof => "[EOF]",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed keyword set. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum ReservedWord {
    And,
    Break,
    Do,
    Else,
    ElseIf,
    End,
    False,
    For,
    Function,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
}

static RESERVED_WORDS: LazyLock<FxHashMap<&'static str, ReservedWord>> =
    LazyLock::new(|| ReservedWord::ALL.iter().map(|&w| (w.as_str(), w)).collect());

impl ReservedWord {
    /// Every reserved word, in alphabetical order.
    pub const ALL: [ReservedWord; 21] = [
        ReservedWord::And,
        ReservedWord::Break,
        ReservedWord::Do,
        ReservedWord::Else,
        ReservedWord::ElseIf,
        ReservedWord::End,
        ReservedWord::False,
        ReservedWord::For,
        ReservedWord::Function,
        ReservedWord::If,
        ReservedWord::In,
        ReservedWord::Local,
        ReservedWord::Nil,
        ReservedWord::Not,
        ReservedWord::Or,
        ReservedWord::Repeat,
        ReservedWord::Return,
        ReservedWord::Then,
        ReservedWord::True,
        ReservedWord::Until,
        ReservedWord::While,
    ];

    /// Source spelling of the keyword.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReservedWord::And => "and",
            ReservedWord::Break => "break",
            ReservedWord::Do => "do",
            ReservedWord::Else => "else",
            ReservedWord::ElseIf => "elseif",
            ReservedWord::End => "end",
            ReservedWord::False => "false",
            ReservedWord::For => "for",
            ReservedWord::Function => "function",
            ReservedWord::If => "if",
            ReservedWord::In => "in",
            ReservedWord::Local => "local",
            ReservedWord::Nil => "nil",
            ReservedWord::Not => "not",
            ReservedWord::Or => "or",
            ReservedWord::Repeat => "repeat",
            ReservedWord::Return => "return",
            ReservedWord::Then => "then",
            ReservedWord::True => "true",
            ReservedWord::Until => "until",
            ReservedWord::While => "while",
        }
    }

    /// Looks up an identifier in the keyword table.
    ///
    /// # Example
    ///
    /// ```
    /// use minilua_lex::ReservedWord;
    ///
    /// assert_eq!(ReservedWord::from_ident("elseif"), Some(ReservedWord::ElseIf));
    /// assert_eq!(ReservedWord::from_ident("End"), None);
    /// ```
    pub fn from_ident(ident: &str) -> Option<ReservedWord> {
        RESERVED_WORDS.get(ident).copied()
    }
}

impl fmt::Display for ReservedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// `+`
    Add,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Mod,
    /// `^`
    Power,
    /// `#`
    Length,
    /// `==`
    Equal,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `~=`
    NotEqual,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    Concat,
    /// `...`
    Ellipsis,
    /// `=`
    Assign,
}

impl Symbol {
    /// Every symbol, in table order.
    pub const ALL: [Symbol; 26] = [
        Symbol::Add,
        Symbol::Minus,
        Symbol::Multiply,
        Symbol::Divide,
        Symbol::Mod,
        Symbol::Power,
        Symbol::Length,
        Symbol::Equal,
        Symbol::GreaterEqual,
        Symbol::LessEqual,
        Symbol::Less,
        Symbol::Greater,
        Symbol::NotEqual,
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::LeftBrace,
        Symbol::RightBrace,
        Symbol::LeftBracket,
        Symbol::RightBracket,
        Symbol::Semicolon,
        Symbol::Colon,
        Symbol::Comma,
        Symbol::Dot,
        Symbol::Concat,
        Symbol::Ellipsis,
        Symbol::Assign,
    ];

    /// Source spelling of the symbol.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Symbol::Add => "+",
            Symbol::Minus => "-",
            Symbol::Multiply => "*",
            Symbol::Divide => "/",
            Symbol::Mod => "%",
            Symbol::Power => "^",
            Symbol::Length => "#",
            Symbol::Equal => "==",
            Symbol::GreaterEqual => ">=",
            Symbol::LessEqual => "<=",
            Symbol::Less => "<",
            Symbol::Greater => ">",
            Symbol::NotEqual => "~=",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBrace => "{",
            Symbol::RightBrace => "}",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::Semicolon => ";",
            Symbol::Colon => ":",
            Symbol::Comma => ",",
            Symbol::Dot => ".",
            Symbol::Concat => "..",
            Symbol::Ellipsis => "...",
            Symbol::Assign => "=",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
