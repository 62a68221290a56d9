//! Unary and binary operators.
//!
//! Operators are zero-argument maker forms such as `(SYNTHETO::MAKE-BINARY-OP-LT)`.
//! They only occur in the operator position of unary and binary expressions
//! and are resolved there by their own lookup rather than through the registry.
use crate::protocol::{self, FormWriter, FromSexpr, ToSexpr};
use crate::DecodeError;
use acl2_sexpr::Value;

macro_rules! make_operator {
    ($(#[$meta:meta])* $name:ident => $what:literal { $($variant:ident => $maker:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            /// Every operator, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Name of the maker function that constructs this operator.
            pub fn maker(&self) -> &'static str {
                match self {
                    $($name::$variant => $maker),*
                }
            }
        }

        impl ToSexpr for $name {
            fn to_sexpr(&self) -> Value {
                FormWriter::new(self.maker()).finish()
            }
        }

        impl FromSexpr for $name {
            fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
                let Some((Value::Symbol(head), arguments)) =
                    value.as_list().and_then(<[Value]>::split_first)
                else {
                    return Err(DecodeError::shape(
                        $what,
                        format!("expected an operator form, found `{value}`"),
                    ));
                };

                let Some(operator) = Self::ALL
                    .iter()
                    .copied()
                    .find(|operator| protocol::is_maker(head, operator.maker()))
                else {
                    return Err(protocol::unexpected_maker(head, $what));
                };

                if !arguments.is_empty() {
                    return Err(DecodeError::shape(
                        operator.maker(),
                        "operators take no arguments",
                    ));
                }

                Ok(operator)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&crate::to_string(self))
            }
        }
    };
}

make_operator! {
    BinaryOp => "binary operator" {
        Eq => "MAKE-BINARY-OP-EQ",
        Ne => "MAKE-BINARY-OP-NE",
        Lt => "MAKE-BINARY-OP-LT",
        Le => "MAKE-BINARY-OP-LE",
        Gt => "MAKE-BINARY-OP-GT",
        Ge => "MAKE-BINARY-OP-GE",
        And => "MAKE-BINARY-OP-AND",
        Or => "MAKE-BINARY-OP-OR",
        Implies => "MAKE-BINARY-OP-IMPLIES",
        Implied => "MAKE-BINARY-OP-IMPLIED",
        Iff => "MAKE-BINARY-OP-IFF",
        Add => "MAKE-BINARY-OP-ADD",
        Sub => "MAKE-BINARY-OP-SUB",
        Mul => "MAKE-BINARY-OP-MUL",
        Div => "MAKE-BINARY-OP-DIV",
        Rem => "MAKE-BINARY-OP-REM",
    }
}

make_operator! {
    UnaryOp => "unary operator" {
        Not => "MAKE-UNARY-OP-NOT",
        Minus => "MAKE-UNARY-OP-MINUS",
    }
}

#[cfg(test)]
mod test {
    use super::{BinaryOp, UnaryOp};
    use crate::protocol::{FromSexpr, ToSexpr};
    use crate::DecodeError;
    use acl2_sexpr::from_str;
    use rstest::rstest;

    #[rstest]
    #[case("(SYNTHETO::MAKE-BINARY-OP-LT)", BinaryOp::Lt)]
    #[case("(SYNTHETO::MAKE-BINARY-OP-IMPLIED)", BinaryOp::Implied)]
    #[case("(SYNTHETO::MAKE-BINARY-OP-REM)", BinaryOp::Rem)]
    fn test_binary(#[case] source: &str, #[case] expected: BinaryOp) {
        let value = from_str(source).unwrap();
        assert_eq!(expected, BinaryOp::from_sexpr(&value).unwrap());
        assert_eq!(value, expected.to_sexpr());
    }

    #[test]
    fn test_every_operator_round_trips() {
        for op in BinaryOp::ALL {
            assert_eq!(*op, BinaryOp::from_sexpr(&op.to_sexpr()).unwrap());
        }
        for op in UnaryOp::ALL {
            assert_eq!(*op, UnaryOp::from_sexpr(&op.to_sexpr()).unwrap());
        }
    }

    #[test]
    fn test_unary_rejects_binary() {
        let value = from_str("(SYNTHETO::MAKE-BINARY-OP-SUB)").unwrap();
        let err = UnaryOp::from_sexpr(&value).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownMaker(_)), "{err:?}");
    }

    #[test]
    fn test_rejects_arguments() {
        let value = from_str("(SYNTHETO::MAKE-UNARY-OP-NOT :X 1)").unwrap();
        let err = UnaryOp::from_sexpr(&value).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { .. }), "{err:?}");
    }

    #[test]
    fn test_display() {
        assert_eq!("(SYNTHETO::MAKE-UNARY-OP-MINUS)", UnaryOp::Minus.to_string());
    }
}
