use crate::escape::escape_string;
use crate::util::Symbol;
use num_bigint::BigInt;
use std::convert::Infallible;
use std::fmt::Write as _;

use super::{character_literal, Print, Printer};

/// Prints everything on a single line, separating atoms by one space.
struct SimplePrinter {
    needs_whitespace: bool,
    string: String,
}

impl SimplePrinter {
    pub fn new() -> Self {
        Self {
            needs_whitespace: false,
            string: String::new(),
        }
    }

    #[inline]
    fn separate(&mut self) {
        if self.needs_whitespace {
            self.string.push(' ');
        }
        self.needs_whitespace = true;
    }
}

impl Printer for SimplePrinter {
    type Error = Infallible;

    fn symbol(&mut self, symbol: &Symbol) -> Result<(), Self::Error> {
        self.separate();
        let _ = write!(&mut self.string, "{}", symbol);
        Ok(())
    }

    fn string(&mut self, string: &str) -> Result<(), Self::Error> {
        self.separate();
        self.string.push_str(&escape_string(string));
        Ok(())
    }

    fn integer(&mut self, integer: &BigInt) -> Result<(), Self::Error> {
        self.separate();
        let _ = write!(&mut self.string, "{}", integer);
        Ok(())
    }

    fn character(&mut self, code: u8) -> Result<(), Self::Error> {
        self.separate();
        self.string.push_str(&character_literal(code));
        Ok(())
    }

    fn list<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.separate();
        self.string.push('(');
        self.needs_whitespace = false;
        f(self)?;
        self.string.push(')');
        self.needs_whitespace = true;
        Ok(())
    }
}

/// Print a `T` into an s-expression string.
///
/// This function does not produce any line breaks, indentation, or unnecessary whitespace.
/// It is intended to be used when the output is intended to be consumed by another program.
/// Where human readability is a concern, consider using the [`to_string_pretty`] function instead.
///
/// [`to_string_pretty`]: `crate::printer::to_string_pretty`
pub fn to_string<T: Print>(value: T) -> String {
    let mut printer = SimplePrinter::new();
    let _ = value.print(&mut printer);
    printer.string
}
