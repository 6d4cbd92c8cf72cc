// std imports
use std::fmt;

// third-party imports
use logos::Logos;

// local imports
use crate::error::LexErrorKind;

// ---

/// Minimal lexical unit of a JSON document.
///
/// `String` and `Number` tokens borrow their lexemes from the input text.
/// String lexemes are the raw characters between the quotes with escape
/// sequences left undecoded, so a backslash passes through verbatim.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(error = LexErrorKind)]
pub enum Token<'s> {
    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,

    #[regex(r#""[^"]*""#, |lex| unquote(lex.slice()))]
    #[regex(r#""[^"]*"#, unterminated)]
    String(&'s str),

    #[regex(r"-?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?", |lex| lex.slice(), priority = 10)]
    #[regex(r"[0-9A-Za-z][0-9A-Za-z.]*", unexpected_word, priority = 1)]
    Number(&'s str),
}

impl<'s> Token<'s> {
    #[inline]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::BraceOpen => TokenKind::BraceOpen,
            Self::BraceClose => TokenKind::BraceClose,
            Self::BracketOpen => TokenKind::BracketOpen,
            Self::BracketClose => TokenKind::BracketClose,
            Self::Comma => TokenKind::Comma,
            Self::Colon => TokenKind::Colon,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::Null => TokenKind::Null,
            Self::String(_) => TokenKind::String,
            Self::Number(_) => TokenKind::Number,
        }
    }

    /// Raw lexeme of the token, empty for punctuation whose kind implies it.
    #[inline]
    pub fn text(&self) -> &'s str {
        match self {
            Self::String(s) | Self::Number(s) => s,
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            _ => "",
        }
    }
}

#[inline]
fn unquote(s: &str) -> &str {
    &s[1..s.len() - 1]
}

fn unterminated<'s>(_: &mut logos::Lexer<'s, Token<'s>>) -> Result<&'s str, LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

fn unexpected_word<'s>(_: &mut logos::Lexer<'s, Token<'s>>) -> Result<&'s str, LexErrorKind> {
    Err(LexErrorKind::UnexpectedWord)
}

// ---

/// Token kind without the lexeme, for error reporting and kind-only dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Comma,
    Colon,
    True,
    False,
    Null,
    String,
    Number,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BraceOpen => write!(f, "'{{'"),
            Self::BraceClose => write!(f, "'}}'"),
            Self::BracketOpen => write!(f, "'['"),
            Self::BracketClose => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Colon => write!(f, "':'"),
            Self::True => write!(f, "'true'"),
            Self::False => write!(f, "'false'"),
            Self::Null => write!(f, "'null'"),
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
        }
    }
}
