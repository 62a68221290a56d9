//! Parse values from s-expressions.
use crate::lexer::{LexError, Token, Tokenizer};
use crate::util::{Spanned, Value};
use delegate::delegate;
use std::fmt::Display;
use std::ops::Range;

/// Deepest list nesting accepted before parsing fails.
pub const MAX_DEPTH: usize = 512;

/// Recursive descent parser reading one top-level form at a time.
#[derive(Clone)]
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    peeked: Option<Spanned<Token>>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            peeked: None,
        }
    }

    delegate! {
        to self.tokenizer {
            pub fn source(&self) -> &'a str;
        }
    }

    /// Whether only whitespace and comments remain.
    pub fn is_at_end(&mut self) -> Result<bool> {
        Ok(self.peek()?.inner == Token::EndOfInput)
    }

    /// Parse the next top-level form, together with its span.
    pub fn parse_spanned(&mut self) -> Result<Spanned<Value>> {
        let token = self.advance()?;
        let start = token.span.start;
        let value = self.value(token, 0)?;
        let end = self.tokenizer.offset();
        tracing::trace!(start, end, "parsed form");
        Ok(Spanned::new(value, start..end))
    }

    /// Parse the next top-level form.
    pub fn parse_one(&mut self) -> Result<Value> {
        self.parse_spanned().map(Spanned::into_inner)
    }

    /// Parse forms until the end of the input.
    pub fn parse_all(&mut self) -> Result<Vec<Value>> {
        let mut values = Vec::new();
        while !self.is_at_end()? {
            values.push(self.parse_one()?);
        }
        Ok(values)
    }

    fn value(&mut self, token: Spanned<Token>, depth: usize) -> Result<Value> {
        let value = match token.inner {
            Token::OpenParen => self.list(token.span, depth + 1)?,
            Token::CloseParen => return Err(ParseError::syntax("unexpected )", token.span)),
            Token::EndOfInput => return Err(ParseError::syntax("expected a value", token.span)),
            Token::Symbol(symbol) => Value::Symbol(symbol),
            Token::Integer(integer) => Value::Integer(integer),
            Token::String(string) => Value::String(string),
            Token::Character(code) => Value::Character(code),
        };
        Ok(value)
    }

    fn list(&mut self, open: Span, depth: usize) -> Result<Value> {
        if depth > MAX_DEPTH {
            return Err(ParseError::syntax(
                format!("lists nested deeper than {MAX_DEPTH}"),
                open,
            ));
        }

        let mut items = Vec::new();

        loop {
            let token = self.advance()?;
            match token.inner {
                Token::CloseParen => return Ok(Value::List(items)),
                Token::EndOfInput => {
                    return Err(ParseError::syntax(
                        "unexpected end of input in list",
                        open.start..token.span.end,
                    ))
                }
                _ => items.push(self.value(token, depth)?),
            }
        }
    }

    fn peek(&mut self) -> Result<&Spanned<Token>> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.tokenizer.next_token()?,
        };
        Ok(self.peeked.insert(token))
    }

    fn advance(&mut self) -> Result<Spanned<Token>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => Ok(self.tokenizer.next_token()?),
        }
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexError),
    #[error("{message}")]
    Syntax { message: String, span: Span },
}

impl ParseError {
    pub fn syntax(message: impl Display, span: Span) -> Self {
        ParseError::Syntax {
            message: message.to_string(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexical(err) => err.span(),
            ParseError::Syntax { span, .. } => span.clone(),
        }
    }
}

/// Shorthand for a result specialised to parse errors.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Span within a string.
pub type Span = Range<usize>;

/// Parse exactly one value from an s-expression string.
pub fn from_str(source: &str) -> Result<Value> {
    let mut parser = Parser::new(source);
    let value = parser.parse_one()?;

    if !parser.is_at_end()? {
        let start = parser.peek()?.span.start;
        return Err(ParseError::syntax(
            "unexpected input after value",
            start..source.len(),
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod test {
    use super::{from_str, ParseError, Parser, MAX_DEPTH};
    use crate::lexer::LexErrorKind;
    use crate::util::{Symbol, Value};
    use num_bigint::BigInt;
    use rstest::rstest;

    fn sym(name: &str) -> Value {
        Value::Symbol(Symbol::bare(name))
    }

    #[rstest]
    #[case("()", Value::List(vec![]))]
    #[case("(())", Value::List(vec![Value::List(vec![])]))]
    #[case("(LIST \"oo\")", Value::List(vec![sym("LIST"), "oo".into()]))]
    #[case(
        "(A::B :INVARIANT NIL)",
        Value::List(vec![
            Symbol::qualified("A", "B").into(),
            Symbol::keyword("INVARIANT").into(),
            Value::nil(),
        ])
    )]
    #[case(
        "(SYNTHETO::MAKE-LITERAL-CHARACTER :VAL (CODE-CHAR 255))",
        Value::List(vec![
            Symbol::qualified("SYNTHETO", "MAKE-LITERAL-CHARACTER").into(),
            Symbol::keyword("VAL").into(),
            Value::Character(255),
        ])
    )]
    #[case("-12", Value::from(-12i64))]
    #[case("  T  ", Value::t())]
    fn test_parse(#[case] source: &str, #[case] expected: Value) {
        assert_eq!(expected, from_str(source).unwrap());
    }

    #[test]
    fn test_parse_big_integer_list() {
        let expected: BigInt = "23847293842793847292323223313232".parse().unwrap();
        assert_eq!(
            Value::List(vec![sym("LIST"), Value::Integer(expected)]),
            from_str("(LIST 23847293842793847292323223313232)").unwrap()
        );
    }

    #[test]
    fn test_parse_sequence() {
        let mut parser = Parser::new("A (B) ; comment\n \"c\"");
        assert_eq!(sym("A"), parser.parse_one().unwrap());
        assert_eq!(Value::List(vec![sym("B")]), parser.parse_one().unwrap());
        assert!(!parser.is_at_end().unwrap());
        assert_eq!(Value::from("c"), parser.parse_one().unwrap());
        assert!(parser.is_at_end().unwrap());
    }

    #[test]
    fn test_parse_spanned() {
        let mut parser = Parser::new(" (A B) C");
        assert_eq!(1..6, parser.parse_spanned().unwrap().span);
        assert_eq!(7..8, parser.parse_spanned().unwrap().span);
    }

    #[rstest]
    #[case("(A (B)", "unexpected end of input in list")]
    #[case(")", "unexpected )")]
    #[case("", "expected a value")]
    #[case("A B", "unexpected input after value")]
    fn test_syntax_error(#[case] source: &str, #[case] expected: &str) {
        match from_str(source) {
            Err(ParseError::Syntax { message, .. }) => assert_eq!(expected, message),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_list_span() {
        let err = from_str("(A (B)").unwrap_err();
        assert_eq!(0..6, err.span());
    }

    #[test]
    fn test_lexical_error() {
        match from_str("(A \"unterminated)") {
            Err(ParseError::Lexical(err)) => {
                assert_eq!(LexErrorKind::UnterminatedString, err.kind())
            }
            other => panic!("expected lexical error, got {other:?}"),
        }
    }

    fn nested(depth: usize) -> String {
        "(".repeat(depth) + &")".repeat(depth)
    }

    #[test]
    fn test_nesting_at_limit() {
        assert!(from_str(&nested(MAX_DEPTH)).is_ok());
    }

    #[rstest]
    #[case(MAX_DEPTH + 1)]
    #[case(10_000)]
    #[case(100_000)]
    fn test_nesting_past_limit(#[case] depth: usize) {
        match from_str(&nested(depth)) {
            Err(ParseError::Syntax { span, .. }) => assert_eq!(MAX_DEPTH..MAX_DEPTH + 1, span),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }
}
