// local imports
use crate::{
    ast::{Object, Value},
    error::{EmptyInputError, ParseError},
    token::Token,
};

// ---

/// Builds the AST for a single JSON value from the token sequence.
///
/// The whole sequence must be consumed: tokens remaining after the
/// top-level value are rejected with [`ParseError::TrailingToken`].
pub fn parse(tokens: &[Token]) -> Result<Value, ParseError> {
    if tokens.is_empty() {
        return Err(EmptyInputError.into());
    }

    let mut cursor = Cursor::new(tokens);
    let value = cursor.parse_value()?;

    match cursor.peek() {
        Some(token) => Err(ParseError::TrailingToken(token.kind())),
        None => Ok(value),
    }
}

// ---

/// Forward cursor over the token sequence.
///
/// Advancing past the end is reported by the callers as a [`ParseError`],
/// never as an out-of-bounds access.
struct Cursor<'t, 's> {
    tokens: &'t [Token<'s>],
    pos: usize,
}

enum Awaits {
    Item,
    Comma,
}

impl<'t, 's> Cursor<'t, 's> {
    #[inline]
    fn new(tokens: &'t [Token<'s>]) -> Self {
        Self { tokens, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<&'t Token<'s>> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn next(&mut self) -> Option<&'t Token<'s>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Parses one value, dispatching on the kind of the next token.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let token = self.next().ok_or(ParseError::UnexpectedEnd)?;

        match token {
            Token::String(s) => Ok(Value::String((*s).into())),
            Token::Number(s) => parse_number(s),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::Null => Ok(Value::Null),
            Token::BraceOpen => self.parse_object(),
            Token::BracketOpen => self.parse_array(),
            _ => Err(ParseError::UnexpectedToken(token.kind())),
        }
    }

    /// Parses the members of an object and its closing brace.
    ///
    /// > NOTE: we assume '{' was consumed.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let mut object = Object::new();
        let mut awaits = Awaits::Item;

        loop {
            let Some(token) = self.next() else {
                return Err(ParseError::UnmatchedBrace);
            };

            match (token, &awaits) {
                // a trailing comma before the brace is tolerated
                (Token::BraceClose, _) => return Ok(Value::Object(object)),
                (Token::Comma, Awaits::Comma) => awaits = Awaits::Item,
                (Token::String(key), Awaits::Item) => {
                    match self.next() {
                        Some(Token::Colon) => {}
                        Some(token) => return Err(ParseError::ExpectedColon(token.kind())),
                        None => return Err(ParseError::UnmatchedBrace),
                    }
                    let value = self.parse_value()?;
                    object.insert((*key).into(), value);
                    awaits = Awaits::Comma;
                }
                (token, Awaits::Item) => return Err(ParseError::ExpectedKey(token.kind())),
                (token, Awaits::Comma) => return Err(ParseError::ExpectedComma(token.kind())),
            }
        }
    }

    /// Parses the elements of an array and its closing bracket.
    ///
    /// > NOTE: we assume '[' was consumed.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        let mut awaits = Awaits::Item;

        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::UnmatchedBracket);
            };

            match (token, &awaits) {
                // a trailing comma before the bracket is tolerated
                (Token::BracketClose, _) => {
                    self.next();
                    return Ok(Value::Array(items));
                }
                (Token::Comma, Awaits::Comma) => {
                    self.next();
                    awaits = Awaits::Item;
                }
                (_, Awaits::Item) => {
                    items.push(self.parse_value()?);
                    awaits = Awaits::Comma;
                }
                (token, Awaits::Comma) => return Err(ParseError::ExpectedComma(token.kind())),
            }
        }
    }
}

fn parse_number(text: &str) -> Result<Value, ParseError> {
    text.parse()
        .map(Value::Number)
        .map_err(|_| ParseError::MalformedNumber(text.into()))
}
