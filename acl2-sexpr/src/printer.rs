//! Print values into s-expressions.
//!
//! The single-line form produced by [`to_string`] is what the prover's reader
//! consumes. [`to_string_pretty`] breaks long lists over several lines; the
//! result reads back as the same value.
use num_bigint::BigInt;
use std::rc::Rc;
use std::sync::Arc;
mod pretty;
mod simple;
pub use pretty::to_string_pretty;
pub use simple::to_string;

use crate::util::Symbol;

/// Line width used when no other width is requested.
pub const DEFAULT_WIDTH: usize = 100;

/// Trait for types that can print s-expressions.
pub trait Printer: Sized {
    type Error;

    /// Print a symbol.
    fn symbol(&mut self, symbol: &Symbol) -> Result<(), Self::Error>;

    /// Print a string.
    fn string(&mut self, string: &str) -> Result<(), Self::Error>;

    /// Print an integer.
    fn integer(&mut self, integer: &BigInt) -> Result<(), Self::Error>;

    /// Print a character literal.
    fn character(&mut self, code: u8) -> Result<(), Self::Error>;

    /// Print a list given a function that prints the contents.
    fn list<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Print a printable value.
    fn print(&mut self, value: impl Print) -> Result<(), Self::Error> {
        value.print(self)
    }
}

/// Trait for types that can be printed as an s-expression.
pub trait Print {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error>;
}

impl<T: Print + Sized> Print for &T {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        (*self).print(printer)
    }
}

impl<T: Print> Print for Box<T> {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.print(self.as_ref())
    }
}

impl<T: Print> Print for Rc<T> {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.print(self.as_ref())
    }
}

impl<T: Print> Print for Arc<T> {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.print(self.as_ref())
    }
}

/// Prints the items one after another, without enclosing parentheses.
impl<T: Print> Print for Vec<T> {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        for item in self {
            printer.print(item)?;
        }
        Ok(())
    }
}

/// Text of a character literal.
pub(crate) fn character_literal(code: u8) -> String {
    format!("({} {})", crate::util::CODE_CHAR, code)
}
