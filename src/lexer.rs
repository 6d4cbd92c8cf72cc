// third-party imports
use logos::Logos;

// local imports
use crate::{error::LexError, token::Token};

// ---

/// Scans the input text into its complete token sequence.
///
/// The scan is a single left-to-right pass and stops at the first malformed
/// region, reporting it as a [`LexError`] with the byte span of the
/// offending characters.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(kind) => {
                return Err(LexError {
                    kind,
                    span: lexer.span(),
                });
            }
        }
    }

    Ok(tokens)
}
