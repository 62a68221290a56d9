//! Types and type definitions.
use crate::{Expression, FromSexpr, Identifier, ToSexpr};

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "type")]
pub enum Type {
    #[sexpr(maker = "MAKE-TYPE-BOOLEAN")]
    Boolean,
    #[sexpr(maker = "MAKE-TYPE-CHARACTER")]
    Character,
    #[sexpr(maker = "MAKE-TYPE-INTEGER")]
    Integer,
    #[sexpr(maker = "MAKE-TYPE-STRING")]
    String,
    Defined(TypeDefined),
    Map(TypeMap),
    Option(TypeOption),
    Sequence(TypeSequence),
    Set(TypeSet),
}

/// A reference to a named type.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-DEFINED")]
pub struct TypeDefined {
    pub name: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-MAP")]
pub struct TypeMap {
    pub domain: Box<Type>,
    pub range: Box<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-OPTION")]
pub struct TypeOption {
    pub base: Box<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-SEQUENCE")]
pub struct TypeSequence {
    pub element: Box<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-SET")]
pub struct TypeSet {
    pub element: Box<Type>,
}

impl Type {
    pub fn defined(name: Identifier) -> Self {
        Type::Defined(TypeDefined { name })
    }

    pub fn map(domain: Type, range: Type) -> Self {
        Type::Map(TypeMap {
            domain: Box::new(domain),
            range: Box::new(range),
        })
    }

    pub fn option(base: Type) -> Self {
        Type::Option(TypeOption {
            base: Box::new(base),
        })
    }

    pub fn sequence(element: Type) -> Self {
        Type::Sequence(TypeSequence {
            element: Box::new(element),
        })
    }

    pub fn set(element: Type) -> Self {
        Type::Set(TypeSet {
            element: Box::new(element),
        })
    }
}

/// The body of a type definition.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "type definer")]
pub enum TypeDefiner {
    Product(TypeDefinerProduct),
    Subset(TypeDefinerSubset),
    Sum(TypeDefinerSum),
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-DEFINER-PRODUCT")]
pub struct TypeDefinerProduct {
    #[sexpr(rename = "GET")]
    pub product: TypeProduct,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-DEFINER-SUBSET")]
pub struct TypeDefinerSubset {
    #[sexpr(rename = "GET")]
    pub subset: TypeSubset,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-DEFINER-SUM")]
pub struct TypeDefinerSum {
    #[sexpr(rename = "GET")]
    pub sum: TypeSum,
}

/// A named, typed component of a product type.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FIELD")]
pub struct Field {
    pub name: Identifier,
    #[sexpr(rename = "TYPE")]
    pub ty: Type,
}

/// A record type, optionally restricted by an invariant over its fields.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-PRODUCT")]
pub struct TypeProduct {
    pub fields: Vec<Field>,
    pub invariant: Option<Expression>,
}

/// The values of `supertype` for which `restriction` holds of `variable`.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-SUBSET")]
pub struct TypeSubset {
    pub supertype: Type,
    pub variable: Identifier,
    pub restriction: Expression,
    pub witness: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-ALTERNATIVE")]
pub struct Alternative {
    pub name: Identifier,
    pub product: TypeProduct,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-SUM")]
pub struct TypeSum {
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-DEFINITION")]
pub struct TypeDefinition {
    pub name: Identifier,
    pub body: TypeDefiner,
}

/// Mutually recursive type definitions.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPE-RECURSION")]
pub struct TypeRecursion {
    pub definitions: Vec<TypeDefinition>,
}
