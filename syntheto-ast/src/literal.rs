use crate::{FromSexpr, ToSexpr};
use num_bigint::BigUint;
use smol_str::SmolStr;

/// A literal constant.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "literal")]
pub enum Literal {
    Boolean(LiteralBoolean),
    Character(LiteralCharacter),
    Integer(LiteralInteger),
    String(LiteralString),
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-LITERAL-BOOLEAN")]
pub struct LiteralBoolean {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-LITERAL-CHARACTER")]
pub struct LiteralCharacter {
    pub value: u8,
}

/// A natural number. Negative numbers are the unary minus of a literal.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-LITERAL-INTEGER")]
pub struct LiteralInteger {
    pub value: BigUint,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-LITERAL-STRING")]
pub struct LiteralString {
    pub value: SmolStr,
}

impl Literal {
    pub fn boolean(value: bool) -> Self {
        Literal::Boolean(LiteralBoolean { value })
    }

    pub fn character(value: u8) -> Self {
        Literal::Character(LiteralCharacter { value })
    }

    pub fn integer(value: impl Into<BigUint>) -> Self {
        Literal::Integer(LiteralInteger {
            value: value.into(),
        })
    }

    pub fn string(value: impl Into<SmolStr>) -> Self {
        Literal::String(LiteralString {
            value: value.into(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::Literal;
    use crate::{from_str, to_string, DecodeError, Error};
    use num_bigint::BigUint;
    use rstest::rstest;

    #[rstest]
    #[case("(SYNTHETO::MAKE-LITERAL-INTEGER :VALUE 42)", Literal::integer(42u32))]
    #[case("(SYNTHETO::MAKE-LITERAL-BOOLEAN :VALUE T)", Literal::boolean(true))]
    #[case("(SYNTHETO::MAKE-LITERAL-BOOLEAN :VALUE NIL)", Literal::boolean(false))]
    #[case("(SYNTHETO::MAKE-LITERAL-CHARACTER :VALUE (CODE-CHAR 255))", Literal::character(255))]
    #[case("(SYNTHETO::MAKE-LITERAL-STRING :VALUE \"a \\\"b\\\"\")", Literal::string("a \"b\""))]
    fn test_round_trip(#[case] source: &str, #[case] expected: Literal) {
        let literal: Literal = from_str(source).unwrap();
        assert_eq!(expected, literal);
        assert_eq!(source, to_string(&literal));
    }

    #[test]
    fn test_big_integer() {
        let source = "(SYNTHETO::MAKE-LITERAL-INTEGER :VALUE 712398741293847129384712093847120938471209834712093847)";
        let literal: Literal = from_str(source).unwrap();
        let expected: BigUint = "712398741293847129384712093847120938471209834712093847"
            .parse()
            .unwrap();
        assert_eq!(Literal::integer(expected), literal);
        assert_eq!(source, to_string(&literal));
    }

    #[test]
    fn test_character_out_of_range() {
        let source = "(SYNTHETO::MAKE-LITERAL-CHARACTER :VALUE (CODE-CHAR 256))";
        assert!(matches!(from_str::<Literal>(source), Err(Error::Read(_))));
    }

    #[test]
    fn test_negative_integer() {
        let source = "(SYNTHETO::MAKE-LITERAL-INTEGER :VALUE -5)";
        let Err(Error::Decode(err)) = from_str::<Literal>(source) else {
            panic!("negative literal accepted");
        };
        assert!(matches!(err.innermost(), DecodeError::ValueConstraint { .. }), "{err:?}");
    }

    #[test]
    fn test_literal_is_not_a_type() {
        let source = "(SYNTHETO::MAKE-TYPE-INTEGER)";
        let Err(Error::Decode(err)) = from_str::<Literal>(source) else {
            panic!("type accepted as literal");
        };
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "literal", .. }), "{err:?}");
    }
}
