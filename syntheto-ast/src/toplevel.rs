//! Programs and their top-level constructs.
use crate::{
    FromSexpr, FunctionDefinition, FunctionRecursion, FunctionSpecification, Theorem, ToSexpr,
    Transform, TypeDefinition, TypeRecursion,
};

/// A construct that can appear at the top level of a program.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "top-level construct")]
pub enum TopLevel {
    Function(TopLevelFunction),
    Functions(TopLevelFunctions),
    Specification(TopLevelSpecification),
    Theorem(TopLevelTheorem),
    Transform(TopLevelTransform),
    Type(TopLevelType),
    Types(TopLevelTypes),
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TOPLEVEL-FUNCTION")]
pub struct TopLevelFunction {
    #[sexpr(rename = "GET")]
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TOPLEVEL-FUNCTIONS")]
pub struct TopLevelFunctions {
    #[sexpr(rename = "GET")]
    pub functions: FunctionRecursion,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TOPLEVEL-SPECIFICATION")]
pub struct TopLevelSpecification {
    #[sexpr(rename = "GET")]
    pub specification: FunctionSpecification,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TOPLEVEL-THEOREM")]
pub struct TopLevelTheorem {
    #[sexpr(rename = "GET")]
    pub theorem: Theorem,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TOPLEVEL-TRANSFORM")]
pub struct TopLevelTransform {
    #[sexpr(rename = "GET")]
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TOPLEVEL-TYPE")]
pub struct TopLevelType {
    #[sexpr(rename = "GET")]
    pub definition: TypeDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TOPLEVEL-TYPES")]
pub struct TopLevelTypes {
    #[sexpr(rename = "GET")]
    pub types: TypeRecursion,
}

/// A whole program, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-PROGRAM")]
pub struct Program {
    pub tops: Vec<TopLevel>,
}

impl From<FunctionDefinition> for TopLevel {
    fn from(function: FunctionDefinition) -> Self {
        TopLevel::Function(TopLevelFunction { function })
    }
}

impl From<FunctionRecursion> for TopLevel {
    fn from(functions: FunctionRecursion) -> Self {
        TopLevel::Functions(TopLevelFunctions { functions })
    }
}

impl From<FunctionSpecification> for TopLevel {
    fn from(specification: FunctionSpecification) -> Self {
        TopLevel::Specification(TopLevelSpecification { specification })
    }
}

impl From<Theorem> for TopLevel {
    fn from(theorem: Theorem) -> Self {
        TopLevel::Theorem(TopLevelTheorem { theorem })
    }
}

impl From<Transform> for TopLevel {
    fn from(transform: Transform) -> Self {
        TopLevel::Transform(TopLevelTransform { transform })
    }
}

impl From<TypeDefinition> for TopLevel {
    fn from(definition: TypeDefinition) -> Self {
        TopLevel::Type(TopLevelType { definition })
    }
}

impl From<TypeRecursion> for TopLevel {
    fn from(types: TypeRecursion) -> Self {
        TopLevel::Types(TopLevelTypes { types })
    }
}

impl FromIterator<TopLevel> for Program {
    fn from_iter<I: IntoIterator<Item = TopLevel>>(iter: I) -> Self {
        Program {
            tops: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Program, TopLevel};
    use crate::types::{TypeDefinerProduct, TypeProduct};
    use crate::{
        from_str, to_string, to_string_pretty, Field, FromSexpr, Identifier, ToSexpr, Type,
        TypeDefiner, TypeDefinition, TypeRecursion,
    };

    fn ordered_pair() -> TypeDefinition {
        let field = |name: &str| Field {
            name: Identifier::new(name).unwrap(),
            ty: Type::Integer,
        };
        TypeDefinition {
            name: Identifier::new("ordered_pair").unwrap(),
            body: TypeDefiner::Product(TypeDefinerProduct {
                product: TypeProduct {
                    fields: vec![field("x"), field("y")],
                    invariant: None,
                },
            }),
        }
    }

    const THEOREM: &str = concat!(
        "(SYNTHETO::MAKE-TOPLEVEL-THEOREM :GET ",
        "(SYNTHETO::MAKE-THEOREM ",
        ":NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"mul0is0\") ",
        ":VARIABLES (LIST (SYNTHETO::MAKE-TYPED-VARIABLE :NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"x\") :TYPE (SYNTHETO::MAKE-TYPE-INTEGER))) ",
        ":FORMULA (SYNTHETO::MAKE-EXPRESSION-BINARY :OPERATOR (SYNTHETO::MAKE-BINARY-OP-EQ) ",
        ":LEFT-OPERAND (SYNTHETO::MAKE-EXPRESSION-BINARY :OPERATOR (SYNTHETO::MAKE-BINARY-OP-MUL) ",
        ":LEFT-OPERAND (SYNTHETO::MAKE-EXPRESSION-VARIABLE :NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"x\")) ",
        ":RIGHT-OPERAND (SYNTHETO::MAKE-EXPRESSION-LITERAL :GET (SYNTHETO::MAKE-LITERAL-INTEGER :VALUE 0))) ",
        ":RIGHT-OPERAND (SYNTHETO::MAKE-EXPRESSION-LITERAL :GET (SYNTHETO::MAKE-LITERAL-INTEGER :VALUE 0)))))",
    );

    const TYPES: &str = concat!(
        "(SYNTHETO::MAKE-TOPLEVEL-TYPES :GET ",
        "(SYNTHETO::MAKE-TYPE-RECURSION :DEFINITIONS (LIST ",
        "(SYNTHETO::MAKE-TYPE-DEFINITION :NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"ordered_pair\") ",
        ":BODY (SYNTHETO::MAKE-TYPE-DEFINER-PRODUCT :GET ",
        "(SYNTHETO::MAKE-TYPE-PRODUCT ",
        ":FIELDS (LIST (SYNTHETO::MAKE-FIELD :NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"x\") :TYPE (SYNTHETO::MAKE-TYPE-INTEGER)) ",
        "(SYNTHETO::MAKE-FIELD :NAME (SYNTHETO::MAKE-IDENTIFIER :NAME \"y\") :TYPE (SYNTHETO::MAKE-TYPE-INTEGER))) ",
        ":INVARIANT NIL))))))",
    );

    #[test]
    fn test_types() {
        let expected = TopLevel::from(TypeRecursion {
            definitions: vec![ordered_pair()],
        });
        assert_eq!(expected, from_str::<TopLevel>(TYPES).unwrap());
        assert_eq!(TYPES, to_string(&expected));
    }

    #[test]
    fn test_program() {
        let source = format!("(SYNTHETO::MAKE-PROGRAM :TOPS (LIST {THEOREM} {TYPES}))");
        let program: Program = from_str(&source).unwrap();
        assert_eq!(2, program.tops.len());
        assert!(matches!(program.tops[0], TopLevel::Theorem(_)));
        assert!(matches!(program.tops[1], TopLevel::Types(_)));
        assert_eq!(source, to_string(&program));
    }

    #[test]
    fn test_empty_program() {
        let program = Program::default();
        assert_eq!("(SYNTHETO::MAKE-PROGRAM :TOPS (LIST))", program.to_string());
        assert_eq!(program, Program::from_sexpr(&program.to_sexpr()).unwrap());
    }

    #[test]
    fn test_pretty_program_reads_back() {
        let program: Program = [
            TopLevel::from(ordered_pair()),
            from_str::<TopLevel>(THEOREM).unwrap(),
        ]
        .into_iter()
        .collect();
        let pretty = to_string_pretty(&program, 40);
        assert!(pretty.lines().count() > 1);
        assert_eq!(program, from_str::<Program>(&pretty).unwrap());
    }
}
