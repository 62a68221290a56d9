use crate::printer::{Print, Printer};
use crate::util::Symbol;
use num_bigint::BigInt;
use proptest::arbitrary::Arbitrary;
use smol_str::SmolStr;
use std::fmt;

/// An s-expression represented as a recursive enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Symbol(Symbol),
    List(Vec<Value>),
    Integer(BigInt),
    String(SmolStr),
    /// Character code in `0..=255`, written `(CODE-CHAR n)`.
    Character(u8),
}

impl Value {
    pub fn nil() -> Self {
        Value::Symbol(Symbol::nil())
    }

    pub fn t() -> Self {
        Value::Symbol(Symbol::t())
    }

    /// Short description of the kind of value, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Character(_) => "character",
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(integer) => Some(integer),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_character(&self) -> Option<u8> {
        match self {
            Value::Character(code) => Some(*code),
            _ => None,
        }
    }

    /// Whether this is the symbol `NIL`. The empty list `()` is not `NIL` here.
    pub fn is_nil(&self) -> bool {
        self.as_symbol().is_some_and(Symbol::is_nil)
    }
}

impl Print for Value {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        match self {
            Value::Symbol(symbol) => printer.symbol(symbol),
            Value::List(items) => printer.list(|printer| printer.print(items)),
            Value::Integer(integer) => printer.integer(integer),
            Value::String(string) => printer.string(string),
            Value::Character(code) => printer.character(*code),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<SmolStr> for Value {
    fn from(value: SmolStr) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value {
            Self::t()
        } else {
            Self::nil()
        }
    }
}

impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        let leaf = proptest::prop_oneof![
            any::<Symbol>().prop_map(Value::from),
            any::<i128>().prop_map(|int| Value::Integer(int.into())),
            any::<String>().prop_map(Value::from),
            any::<u8>().prop_map(Value::Character),
        ];
        leaf.prop_recursive(8, 256, 10, |inner| {
            proptest::collection::vec(inner, 0..10).prop_map(Value::List)
        })
        .boxed()
    }
}
