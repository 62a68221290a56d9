//! Data types shared by the tokenizer, parser and printer.
mod spanned;
mod symbol;
mod value;

pub use spanned::Spanned;
pub use symbol::{Symbol, CODE_CHAR, KEYWORD_PACKAGE, LIST, NIL, T};
pub(crate) use symbol::{is_valid_bare_name, is_valid_name};
pub use value::Value;
