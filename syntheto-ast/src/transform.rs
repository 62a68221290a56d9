//! Transformations applied to existing functions.
use crate::{Expression, FromSexpr, Identifier, ToSexpr};
use smol_str::SmolStr;

/// Derive `new_function_name` from `old_function_name` with the named transformation.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TRANSFORM")]
pub struct Transform {
    pub new_function_name: Identifier,
    pub old_function_name: Identifier,
    pub transform_name: SmolStr,
    pub arguments: Vec<TransformArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TRANSFORM-ARGUMENT")]
pub struct TransformArgument {
    pub name: Identifier,
    pub value: TransformArgumentValue,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "transform argument value")]
pub enum TransformArgumentValue {
    Bool(TransformArgumentValueBool),
    Identifier(TransformArgumentValueIdentifier),
    Identifiers(TransformArgumentValueIdentifiers),
    Term(TransformArgumentValueTerm),
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TRANSFORM-ARGUMENT-VALUE-BOOL")]
pub struct TransformArgumentValueBool {
    pub val: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TRANSFORM-ARGUMENT-VALUE-IDENTIFIER")]
pub struct TransformArgumentValueIdentifier {
    pub name: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TRANSFORM-ARGUMENT-VALUE-IDENTIFIERS")]
pub struct TransformArgumentValueIdentifiers {
    pub identifier_list: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TRANSFORM-ARGUMENT-VALUE-TERM")]
pub struct TransformArgumentValueTerm {
    #[sexpr(rename = "GET")]
    pub term: Expression,
}

impl From<bool> for TransformArgumentValue {
    fn from(val: bool) -> Self {
        TransformArgumentValue::Bool(TransformArgumentValueBool { val })
    }
}

impl From<Identifier> for TransformArgumentValue {
    fn from(name: Identifier) -> Self {
        TransformArgumentValue::Identifier(TransformArgumentValueIdentifier { name })
    }
}

impl From<Vec<Identifier>> for TransformArgumentValue {
    fn from(identifier_list: Vec<Identifier>) -> Self {
        TransformArgumentValue::Identifiers(TransformArgumentValueIdentifiers { identifier_list })
    }
}

impl From<Expression> for TransformArgumentValue {
    fn from(term: Expression) -> Self {
        TransformArgumentValue::Term(TransformArgumentValueTerm { term })
    }
}

#[cfg(test)]
mod test {
    use super::{Transform, TransformArgument, TransformArgumentValue};
    use crate::{from_str, to_string, DecodeError, Error, Expression, Identifier, Literal};
    use rstest::rstest;

    fn id(name: &str) -> Identifier {
        Identifier::new(name).unwrap()
    }

    #[rstest]
    #[case("(SYNTHETO::MAKE-TRANSFORM-ARGUMENT-VALUE-BOOL :VAL T)", true.into())]
    #[case("(SYNTHETO::MAKE-TRANSFORM-ARGUMENT-VALUE-BOOL :VAL NIL)", false.into())]
    #[case(
        "(SYNTHETO::MAKE-TRANSFORM-ARGUMENT-VALUE-IDENTIFIER :NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"t2\"))",
        id("t2").into()
    )]
    #[case(
        "(SYNTHETO::MAKE-TRANSFORM-ARGUMENT-VALUE-IDENTIFIERS :IDENTIFIER-LIST (LIST (SYNTHETO::MAKE-IDENTIFIER :NAME \"r\") (SYNTHETO::MAKE-IDENTIFIER :NAME \"s\")))",
        vec![id("r"), id("s")].into()
    )]
    #[case(
        "(SYNTHETO::MAKE-TRANSFORM-ARGUMENT-VALUE-TERM :GET (SYNTHETO::MAKE-EXPRESSION-LITERAL :GET (SYNTHETO::MAKE-LITERAL-INTEGER :VALUE 8)))",
        Expression::literal(Literal::integer(8u32)).into()
    )]
    fn test_argument_value(#[case] source: &str, #[case] expected: TransformArgumentValue) {
        assert_eq!(expected, from_str::<TransformArgumentValue>(source).unwrap());
        assert_eq!(source, to_string(&expected));
    }

    #[test]
    fn test_transform() {
        let source = concat!(
            "(SYNTHETO::MAKE-TRANSFORM ",
            ":NEW-FUNCTION-NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"factorial_t\") ",
            ":OLD-FUNCTION-NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"factorial\") ",
            ":TRANSFORM-NAME \"tail_recursion\" ",
            ":ARGUMENTS (LIST (SYNTHETO::MAKE-TRANSFORM-ARGUMENT ",
            ":NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"new_parameter_name\") ",
            ":VALUE (SYNTHETO::MAKE-TRANSFORM-ARGUMENT-VALUE-IDENTIFIER :NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"r\")))))",
        );
        let expected = Transform {
            new_function_name: id("factorial_t"),
            old_function_name: id("factorial"),
            transform_name: "tail_recursion".into(),
            arguments: vec![TransformArgument {
                name: id("new_parameter_name"),
                value: id("r").into(),
            }],
        };
        assert_eq!(expected, from_str::<Transform>(source).unwrap());
        assert_eq!(source, to_string(&expected));
    }

    #[test]
    fn test_transform_name_is_a_string() {
        let source = concat!(
            "(SYNTHETO::MAKE-TRANSFORM ",
            ":NEW-FUNCTION-NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"g\") ",
            ":OLD-FUNCTION-NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"f\") ",
            ":TRANSFORM-NAME TAIL_RECURSION ",
            ":ARGUMENTS (LIST))",
        );
        let Err(Error::Decode(err)) = from_str::<Transform>(source) else {
            panic!("symbol accepted as transform name");
        };
        assert_eq!(vec!["TRANSFORM-NAME"], err.path());
        assert!(matches!(err.innermost(), DecodeError::Shape { .. }), "{err:?}");
    }
}
