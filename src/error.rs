// std imports
use std::ops::Range;

// third-party imports
use thiserror::Error;

// local imports
use crate::token::TokenKind;

// ---

/// LexError is an error which may occur while scanning input text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {span:?}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Range<usize>,
}

/// LexErrorKind classifies the malformed region reported by the lexer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unexpected word")]
    UnexpectedWord,
}

// ---

/// Error raised when the token sequence handed to `parse` is empty,
/// before any grammar production is attempted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("nothing to parse")]
pub struct EmptyInputError;

/// ParseError is an error which may occur while building the AST from tokens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    #[error("unexpected {0} while expecting a value")]
    UnexpectedToken(TokenKind),
    #[error("expected string key in object, found {0}")]
    ExpectedKey(TokenKind),
    #[error("expected ':' after object key, found {0}")]
    ExpectedColon(TokenKind),
    #[error("expected ',' or closing delimiter, found {0}")]
    ExpectedComma(TokenKind),
    #[error("unexpected end of token sequence")]
    UnexpectedEnd,
    #[error("unmatched opening brace")]
    UnmatchedBrace,
    #[error("unmatched opening bracket")]
    UnmatchedBracket,
    #[error("unexpected trailing {0} after the top-level value")]
    TrailingToken(TokenKind),
    #[error("malformed number literal {0:?}")]
    MalformedNumber(String),
}

// ---

/// Error is any error which may occur while parsing text into a JSON value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
