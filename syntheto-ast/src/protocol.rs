//! Encoding of nodes as maker forms.
//!
//! Every node kind `K` with fields `f1 ... fn` is written as
//!
//! ```text
//! (SYNTHETO::MAKE-K :F1 v1 ... :FN vn)
//! ```
//!
//! with the keyword arguments in a fixed order. Field values use the
//! encodings below:
//!
//! | Rust type     | Encoding                       |
//! |---------------|--------------------------------|
//! | `bool`        | `T` or `NIL`                   |
//! | `Option<T>`   | `NIL` when absent              |
//! | `Vec<T>`      | `(LIST v1 ... vn)`             |
//! | `SmolStr`     | a string                       |
//! | `BigUint`     | a non-negative integer         |
//! | `u64`         | a non-negative integer         |
//! | `u8`          | a character, `(CODE-CHAR n)`   |
//! | a node        | its maker form                 |
use crate::{registry, DecodeError, Node};
use acl2_sexpr::util;
use acl2_sexpr::{Symbol, Value};
use num_bigint::{BigInt, BigUint};
use smol_str::SmolStr;

/// Package of every maker symbol.
pub const PACKAGE: &str = "SYNTHETO";

/// The qualified symbol `SYNTHETO::<maker>`.
pub fn maker_symbol(maker: &str) -> Symbol {
    Symbol::qualified(PACKAGE, maker)
}

/// Whether `symbol` is `SYNTHETO::<maker>`.
pub fn is_maker(symbol: &Symbol, maker: &str) -> bool {
    symbol.package() == Some(PACKAGE) && symbol.name() == maker
}

/// Types that can be written as an s-expression.
pub trait ToSexpr {
    fn to_sexpr(&self) -> Value;
}

/// Types that can be read back from an s-expression.
pub trait FromSexpr: Sized {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError>;
}

/// Node kinds with a maker function of their own.
pub trait Maker {
    /// Name of the maker without its package, e.g. `MAKE-PROGRAM`.
    const MAKER: &'static str;
}

/// Decodes one node kind of a family.
pub type Decoder<T> = fn(&Value) -> Result<T, DecodeError>;

/// A sum type over node kinds that can appear in the same position.
pub trait Family: Sized + 'static {
    /// Human readable name used in error messages.
    const NAME: &'static str;

    /// The maker and decoder of every kind in the family.
    fn decoders() -> Vec<(&'static str, Decoder<Self>)>;
}

/// Decode a member of family `F` by dispatching on the maker in the registry.
pub fn decode_family<F>(value: &Value) -> Result<F, DecodeError>
where
    F: Family + TryFrom<Node, Error = Node>,
{
    let node = registry::build(value)?;
    F::try_from(node).map_err(|node| DecodeError::TypeMismatch {
        expected: F::NAME,
        found: maker_symbol(node.maker()),
    })
}

/// Error for a form whose head is not the maker that was expected.
pub(crate) fn unexpected_maker(head: &Symbol, expected: &'static str) -> DecodeError {
    if registry::registry().contains(head) {
        DecodeError::TypeMismatch {
            expected,
            found: head.clone(),
        }
    } else {
        DecodeError::UnknownMaker(head.clone())
    }
}

/// Reads the keyword arguments of a maker form in order.
pub struct FormReader<'a> {
    maker: &'static str,
    arguments: &'a [Value],
}

impl<'a> FormReader<'a> {
    /// Check that `value` is a call of `maker` with `arity` keyword arguments.
    pub fn open(value: &'a Value, maker: &'static str, arity: usize) -> Result<Self, DecodeError> {
        let Some((Value::Symbol(head), arguments)) = value.as_list().and_then(<[Value]>::split_first)
        else {
            return Err(DecodeError::shape(
                maker,
                format!("expected a maker form, found {} `{}`", value.kind(), value),
            ));
        };

        if !is_maker(head, maker) {
            return Err(unexpected_maker(head, maker));
        }

        if arguments.len() != arity * 2 {
            return Err(DecodeError::shape(
                maker,
                format!(
                    "expected {} keyword arguments, found {} values",
                    arity,
                    arguments.len()
                ),
            ));
        }

        Ok(Self { maker, arguments })
    }

    /// Read the argument for `keyword`, which must come next.
    pub fn field<T: FromSexpr>(&mut self, keyword: &'static str) -> Result<T, DecodeError> {
        let arguments = self.arguments;
        let [key, value, rest @ ..] = arguments else {
            return Err(DecodeError::shape(self.maker, format!("missing :{keyword}")));
        };

        let matches = key
            .as_symbol()
            .is_some_and(|key| key.is_keyword() && key.name() == keyword);
        if !matches {
            return Err(DecodeError::shape(
                self.maker,
                format!("expected :{keyword}, found `{key}`"),
            ));
        }

        self.arguments = rest;
        T::from_sexpr(value).map_err(|err| err.within(self.maker, keyword))
    }

    /// Check that every argument has been read.
    pub fn finish(self) -> Result<(), DecodeError> {
        match self.arguments.first() {
            None => Ok(()),
            Some(extra) => Err(DecodeError::shape(
                self.maker,
                format!("unexpected argument `{extra}`"),
            )),
        }
    }
}

/// Builds a maker form one keyword argument at a time.
pub struct FormWriter {
    items: Vec<Value>,
}

impl FormWriter {
    pub fn new(maker: &str) -> Self {
        Self {
            items: vec![Value::Symbol(maker_symbol(maker))],
        }
    }

    pub fn field<T: ToSexpr + ?Sized>(mut self, keyword: &str, value: &T) -> Self {
        self.items.push(Value::Symbol(Symbol::keyword(keyword)));
        self.items.push(value.to_sexpr());
        self
    }

    pub fn finish(self) -> Value {
        Value::List(self.items)
    }
}

impl ToSexpr for bool {
    fn to_sexpr(&self) -> Value {
        Value::from(*self)
    }
}

impl FromSexpr for bool {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        match value.as_symbol() {
            Some(symbol) if symbol.is_bare(util::T) => Ok(true),
            Some(symbol) if symbol.is_nil() => Ok(false),
            _ => Err(DecodeError::shape(
                "boolean",
                format!("expected T or NIL, found `{value}`"),
            )),
        }
    }
}

impl<T: ToSexpr> ToSexpr for Option<T> {
    fn to_sexpr(&self) -> Value {
        match self {
            Some(inner) => inner.to_sexpr(),
            None => Value::nil(),
        }
    }
}

impl<T: FromSexpr> FromSexpr for Option<T> {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        if value.is_nil() {
            Ok(None)
        } else {
            T::from_sexpr(value).map(Some)
        }
    }
}

impl<T: ToSexpr> ToSexpr for Vec<T> {
    fn to_sexpr(&self) -> Value {
        let mut items = Vec::with_capacity(self.len() + 1);
        items.push(Value::Symbol(Symbol::list()));
        items.extend(self.iter().map(ToSexpr::to_sexpr));
        Value::List(items)
    }
}

impl<T: FromSexpr> FromSexpr for Vec<T> {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        match value.as_list().and_then(<[Value]>::split_first) {
            Some((Value::Symbol(head), items)) if head.is_bare(util::LIST) => {
                items.iter().map(T::from_sexpr).collect()
            }
            _ => Err(DecodeError::shape(
                "sequence",
                format!("expected (LIST ...), found `{value}`"),
            )),
        }
    }
}

impl<T: ToSexpr + ?Sized> ToSexpr for Box<T> {
    fn to_sexpr(&self) -> Value {
        (**self).to_sexpr()
    }
}

impl<T: FromSexpr> FromSexpr for Box<T> {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        T::from_sexpr(value).map(Box::new)
    }
}

impl ToSexpr for SmolStr {
    fn to_sexpr(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FromSexpr for SmolStr {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(string) => Ok(string.clone()),
            _ => Err(DecodeError::shape(
                "string",
                format!("expected a string, found `{value}`"),
            )),
        }
    }
}

fn integer(value: &Value) -> Result<&BigInt, DecodeError> {
    value.as_integer().ok_or_else(|| {
        DecodeError::shape("integer", format!("expected an integer, found `{value}`"))
    })
}

impl ToSexpr for BigUint {
    fn to_sexpr(&self) -> Value {
        Value::Integer(BigInt::from(self.clone()))
    }
}

impl FromSexpr for BigUint {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        let integer = integer(value)?;
        integer.to_biguint().ok_or_else(|| {
            DecodeError::value_constraint(
                "natural number",
                format!("{integer} is negative; negative numbers are written with unary minus"),
            )
        })
    }
}

impl ToSexpr for u64 {
    fn to_sexpr(&self) -> Value {
        Value::Integer(BigInt::from(*self))
    }
}

impl FromSexpr for u64 {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        let integer = integer(value)?;
        u64::try_from(integer).map_err(|_| {
            DecodeError::value_constraint("index", format!("{integer} is out of range"))
        })
    }
}

/// Characters are single bytes.
impl ToSexpr for u8 {
    fn to_sexpr(&self) -> Value {
        Value::Character(*self)
    }
}

impl FromSexpr for u8 {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        value.as_character().ok_or_else(|| {
            DecodeError::shape(
                "character",
                format!("expected (CODE-CHAR n), found `{value}`"),
            )
        })
    }
}

#[cfg(test)]
mod test {
    use super::{FormReader, FormWriter, FromSexpr, ToSexpr};
    use crate::DecodeError;
    use acl2_sexpr::{from_str, Value};
    use num_bigint::BigUint;
    use rstest::rstest;
    use smol_str::SmolStr;

    fn read(source: &str) -> Value {
        from_str(source).unwrap()
    }

    #[rstest]
    #[case("T", true)]
    #[case("NIL", false)]
    fn test_bool(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(expected, bool::from_sexpr(&read(source)).unwrap());
        assert_eq!(source, expected.to_sexpr().to_string());
    }

    #[rstest]
    #[case("t")]
    #[case("()")]
    #[case("1")]
    #[case(":T")]
    fn test_bool_rejects(#[case] source: &str) {
        let err = bool::from_sexpr(&read(source)).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { .. }), "{err:?}");
    }

    #[rstest]
    #[case("(LIST)", vec![])]
    #[case("(LIST \"a\" \"b\" \"c\")", vec!["a", "b", "c"])]
    fn test_sequence(#[case] source: &str, #[case] expected: Vec<&str>) {
        let expected: Vec<SmolStr> = expected.into_iter().map(SmolStr::from).collect();
        let decoded = Vec::<SmolStr>::from_sexpr(&read(source)).unwrap();
        assert_eq!(expected, decoded);
        assert_eq!(source, decoded.to_sexpr().to_string());
    }

    #[rstest]
    #[case("NIL")]
    #[case("()")]
    #[case("(\"a\")")]
    #[case("(A::LIST \"a\")")]
    fn test_sequence_requires_list_marker(#[case] source: &str) {
        let err = Vec::<SmolStr>::from_sexpr(&read(source)).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { .. }), "{err:?}");
    }

    #[test]
    fn test_option() {
        assert_eq!(None, Option::<SmolStr>::from_sexpr(&Value::nil()).unwrap());
        assert_eq!(
            Some(SmolStr::from("x")),
            Option::<SmolStr>::from_sexpr(&read("\"x\"")).unwrap()
        );
        assert_eq!(Value::nil(), None::<SmolStr>.to_sexpr());
    }

    #[test]
    fn test_natural_number() {
        let digits = "712398741293847129384712093847120938471209834712093847";
        let natural = BigUint::from_sexpr(&read(digits)).unwrap();
        assert_eq!(digits, natural.to_string());

        let err = BigUint::from_sexpr(&read("-3")).unwrap_err();
        assert!(matches!(err, DecodeError::ValueConstraint { .. }), "{err:?}");
    }

    #[rstest]
    #[case("(CODE-CHAR 0)", 0)]
    #[case("(CODE-CHAR 255)", 255)]
    fn test_character(#[case] source: &str, #[case] expected: u8) {
        assert_eq!(expected, u8::from_sexpr(&read(source)).unwrap());
        assert_eq!(source, expected.to_sexpr().to_string());
    }

    #[test]
    fn test_index_out_of_range() {
        let err = u64::from_sexpr(&read("-1")).unwrap_err();
        assert!(matches!(err, DecodeError::ValueConstraint { .. }), "{err:?}");
    }

    #[test]
    fn test_form_reader_keyword_order() {
        let value = read("(SYNTHETO::MAKE-X :B \"b\" :A \"a\")");
        let mut form = FormReader::open(&value, "MAKE-X", 2).unwrap();
        let err = form.field::<SmolStr>("A").unwrap_err();
        assert!(matches!(err, DecodeError::Shape { .. }), "{err:?}");
    }

    #[test]
    fn test_form_reader_arity() {
        let value = read("(SYNTHETO::MAKE-X :A \"a\")");
        assert!(matches!(
            FormReader::open(&value, "MAKE-X", 2),
            Err(DecodeError::Shape { .. })
        ));
    }

    #[test]
    fn test_form_reader_field_context() {
        let value = read("(SYNTHETO::MAKE-X :A 1)");
        let mut form = FormReader::open(&value, "MAKE-X", 1).unwrap();
        let err = form.field::<SmolStr>("A").unwrap_err();
        assert_eq!(vec!["A"], err.path());
        assert!(matches!(err.innermost(), DecodeError::Shape { .. }));
    }

    #[test]
    fn test_form_writer() {
        let value = FormWriter::new("MAKE-X")
            .field("A", &SmolStr::from("a"))
            .field("B", &vec![true, false])
            .finish();
        assert_eq!(
            "(SYNTHETO::MAKE-X :A \"a\" :B (LIST T NIL))",
            value.to_string()
        );
    }
}
