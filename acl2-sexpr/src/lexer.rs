//! Split s-expression text into tokens.
use logos::Logos;
use num_bigint::BigInt;
use smol_str::SmolStr;

use crate::{
    escape::unescape,
    parser::Span,
    util::{is_valid_name, Spanned, Symbol, CODE_CHAR, KEYWORD_PACKAGE},
};

#[derive(Debug, Clone, PartialEq, Logos)]
#[logos(skip r"([ \t\r\n\f]+|;[^\n]*)+")]
enum RawToken {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,
    #[regex(r"-?[0-9]+", priority = 3)]
    Integer,
    #[regex(r"[A-Za-z0-9_:\-]+")]
    Atom,
}

/// A token of s-expression text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    OpenParen,
    CloseParen,
    Symbol(Symbol),
    Integer(BigInt),
    String(SmolStr),
    /// A complete `(CODE-CHAR n)` literal.
    Character(u8),
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid escape sequence in string")]
    InvalidEscape,
    #[error("malformed symbol")]
    MalformedSymbol,
    #[error("malformed integer")]
    MalformedInteger,
    #[error("malformed character literal")]
    CharacterCode,
    #[error("unexpected character")]
    UnexpectedCharacter,
}

/// A lexical error, pointing at the offending text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} `{lexeme}` at offset {}", .span.start)]
pub struct LexError {
    kind: LexErrorKind,
    lexeme: SmolStr,
    span: Span,
}

impl LexError {
    fn new(kind: LexErrorKind, source: &str, span: Span) -> Self {
        let lexeme = source.get(span.clone()).unwrap_or_default().into();
        Self { kind, lexeme, span }
    }

    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }
}

/// Pull-based tokenizer over a source string.
///
/// Once the input is exhausted, every further call yields [`Token::EndOfInput`].
#[derive(Clone)]
pub struct Tokenizer<'a> {
    lexer: logos::Lexer<'a, RawToken>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: RawToken::lexer(source),
        }
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.lexer.source()
    }

    /// Byte offset just past the last token returned.
    #[inline]
    pub fn offset(&self) -> usize {
        self.lexer.span().end
    }

    pub fn next_token(&mut self) -> Result<Spanned<Token>, LexError> {
        let Some(raw) = self.lexer.next() else {
            let end = self.source().len();
            return Ok(Spanned::new(Token::EndOfInput, end..end));
        };

        let span = self.lexer.span();
        let slice = self.lexer.slice();

        let Ok(raw) = raw else {
            let kind = if slice.starts_with('"') {
                LexErrorKind::UnterminatedString
            } else {
                LexErrorKind::UnexpectedCharacter
            };
            return Err(self.error(kind, span));
        };

        let token = match raw {
            RawToken::OpenParen => return self.open_paren(span),
            RawToken::CloseParen => Token::CloseParen,
            RawToken::String => {
                let inner = &slice[1..slice.len() - 1];
                let unescaped =
                    unescape(inner).ok_or_else(|| self.error(LexErrorKind::InvalidEscape, span.clone()))?;
                Token::String(unescaped.into())
            }
            RawToken::Integer => {
                let integer = slice
                    .parse()
                    .map_err(|_| self.error(LexErrorKind::MalformedInteger, span.clone()))?;
                Token::Integer(integer)
            }
            RawToken::Atom => {
                if slice.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
                    return Err(self.error(LexErrorKind::MalformedInteger, span));
                }
                let symbol = split_symbol(slice)
                    .ok_or_else(|| self.error(LexErrorKind::MalformedSymbol, span.clone()))?;
                Token::Symbol(symbol)
            }
        };

        Ok(Spanned::new(token, span))
    }

    /// An opening parenthesis either starts a list or a `(CODE-CHAR n)` literal.
    fn open_paren(&mut self, open: Span) -> Result<Spanned<Token>, LexError> {
        let mut lookahead = self.lexer.clone();
        match lookahead.next() {
            Some(Ok(RawToken::Atom)) if lookahead.slice() == CODE_CHAR => {}
            _ => return Ok(Spanned::new(Token::OpenParen, open)),
        }

        let code = match lookahead.next() {
            Some(Ok(RawToken::Integer)) => lookahead.slice().parse::<u8>().ok(),
            _ => None,
        };
        let closed = code.is_some() && matches!(lookahead.next(), Some(Ok(RawToken::CloseParen)));

        let span = open.start..lookahead.span().end;
        self.lexer = lookahead;

        match code {
            Some(code) if closed => Ok(Spanned::new(Token::Character(code), span)),
            _ => Err(self.error(LexErrorKind::CharacterCode, span)),
        }
    }

    fn error(&self, kind: LexErrorKind, span: Span) -> LexError {
        LexError::new(kind, self.source(), span)
    }
}

/// Splits an atom into `:NAME`, `PACKAGE::NAME` or a bare `NAME`.
fn split_symbol(atom: &str) -> Option<Symbol> {
    if let Some(name) = atom.strip_prefix(':') {
        return is_unqualified(name).then(|| Symbol::qualified(KEYWORD_PACKAGE, name));
    }

    match atom.split_once("::") {
        Some((package, name)) if is_unqualified(package) && is_unqualified(name) => {
            Some(Symbol::qualified(package, name))
        }
        Some(_) => None,
        None => is_unqualified(atom).then(|| Symbol::bare(atom)),
    }
}

fn is_unqualified(name: &str) -> bool {
    !name.contains(':') && is_valid_name(name)
}
