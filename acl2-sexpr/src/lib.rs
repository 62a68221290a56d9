//! S-expressions as read and written by the ACL2 theorem prover.
//!
//! # Syntax
//!
//! This crate implements the subset of Common Lisp reader syntax that is
//! needed to exchange data with the prover:
//!
//! - **Lists** are sequences of values, delimited on the outside by `(` and `)`
//!   and separated by whitespace. Dotted pairs are not supported, and lists
//!   may nest at most [`MAX_DEPTH`] deep.
//!
//! - **Symbols** are runs of letters, digits, `_` and `-` that do not start like
//!   an integer. A symbol may be qualified by a package as in `PKG::NAME`, or be
//!   a keyword such as `:NAME`. Symbols are case sensitive and are never folded.
//!
//! - **Integers** are optionally signed decimal numbers of arbitrary size.
//!
//! - **Strings** are enclosed in double quotes. On input `\"`, `\\`, `\n`, `\r`,
//!   `\t` and `\u00XX` are recognised. On output only `"` and `\` are escaped.
//!
//! - **Characters** are written `(CODE-CHAR n)` with `n` in `0..=255`.
//!
//! - **Comments** begin with a `;` and extend to the end of the line.

pub(crate) mod escape;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod util;

pub use lexer::{LexError, LexErrorKind, Token, Tokenizer};
pub use parser::{from_str, ParseError, Parser, MAX_DEPTH};
pub use printer::{to_string, to_string_pretty, DEFAULT_WIDTH};
pub use util::{Spanned, Symbol, Value};
