use std::convert::Infallible;

use crate::escape::escape_string;
use crate::util::Symbol;
use num_bigint::BigInt;

use super::{character_literal, Print, Printer};
use pretty::DocAllocator as _;

/// A pretty printer that uses the `pretty` crate to format the output.
struct PrettyPrinter<'a> {
    arena: &'a pretty::Arena<'a>,
    items: Vec<pretty::DocBuilder<'a, pretty::Arena<'a>>>,
}

impl<'a> PrettyPrinter<'a> {
    fn atom(&mut self, text: String) -> Result<(), Infallible> {
        let doc = self.arena.text(text);
        self.items.push(doc);
        Ok(())
    }
}

impl<'a> Printer for PrettyPrinter<'a> {
    type Error = Infallible;

    fn symbol(&mut self, symbol: &Symbol) -> Result<(), Self::Error> {
        self.atom(symbol.to_string())
    }

    fn string(&mut self, string: &str) -> Result<(), Self::Error> {
        self.atom(escape_string(string))
    }

    fn integer(&mut self, integer: &BigInt) -> Result<(), Self::Error> {
        self.atom(integer.to_string())
    }

    fn character(&mut self, code: u8) -> Result<(), Self::Error> {
        self.atom(character_literal(code))
    }

    fn list<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        let position = self.items.len();
        f(self)?;
        let items = self.items.drain(position..);

        let docs = self
            .arena
            .intersperse(items, self.arena.line())
            .nest(2)
            .group();

        self.items.push(
            self.arena
                .text("(")
                .append(docs)
                .append(self.arena.text(")")),
        );

        Ok(())
    }
}

/// Pretty print a `T` into an s-expression string.
///
/// Lists that do not fit into `width` columns are broken between their
/// elements, one element per line. Consecutive top-level values are
/// separated by an empty line.
pub fn to_string_pretty<T: Print>(value: T, width: usize) -> String {
    let arena = pretty::Arena::new();
    let mut printer = PrettyPrinter {
        items: vec![],
        arena: &arena,
    };

    let _ = value.print(&mut printer);

    let double_line = arena.line().append(arena.line());
    let doc = arena.intersperse(printer.items, double_line);

    let mut string = String::new();
    let _ = doc.render_fmt(width, &mut string);
    string
}

#[cfg(test)]
mod test {
    use super::to_string_pretty;
    use crate::util::{Symbol, Value};
    use crate::{from_str, to_string};

    fn form() -> Value {
        let maker = Symbol::qualified("SYNTHETO", "MAKE-EXPRESSION-IF");
        let branch = |text: &str| {
            Value::List(vec![
                Symbol::qualified("SYNTHETO", "MAKE-LITERAL-STRING").into(),
                Symbol::keyword("VALUE").into(),
                text.into(),
            ])
        };
        Value::List(vec![
            maker.into(),
            Symbol::keyword("TEST").into(),
            Value::nil(),
            Symbol::keyword("THEN").into(),
            branch("1"),
            Symbol::keyword("ELSE").into(),
            branch("0"),
        ])
    }

    #[test]
    fn fits_on_one_line() {
        let value = form();
        assert_eq!(to_string(&value), to_string_pretty(&value, 200));
    }

    #[test]
    fn breaks_long_lists() {
        let value = form();
        let pretty = to_string_pretty(&value, 20);
        assert!(pretty.lines().count() > 1);
        assert_eq!(value, from_str(&pretty).unwrap());
    }
}
