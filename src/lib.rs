//! JSON tokenizer and recursive-descent parser producing a typed AST.
//!
//! The crate exposes three operations: [`tokenize`] converts text into a
//! token sequence, [`parse`] builds a [`Value`] tree from that sequence,
//! and [`is_valid`] composes the two into a boolean validity probe.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parse;
pub mod token;

pub use ast::{Object, Value};
pub use error::{EmptyInputError, Error, LexError, LexErrorKind, ParseError};
pub use lexer::tokenize;
pub use parse::parse;
pub use token::{Token, TokenKind};

// ---

/// Parses text into a JSON value in one step.
pub fn parse_str(input: &str) -> error::Result<Value> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}

/// Reports whether the text is a structurally valid JSON document.
///
/// All lexing and parsing errors are swallowed into `false`.
pub fn is_valid(input: &str) -> bool {
    parse_str(input).is_ok()
}
