//! A single type for every node with a maker of its own.
use crate::protocol::{FromSexpr, ToSexpr};
use crate::registry::{self, Registry};
use crate::{
    Alternative, Branch, DecodeError, Expression, Field, FunctionDefiner, FunctionDefinition,
    FunctionHeader, FunctionRecursion, FunctionSpecification, FunctionSpecifier, Identifier,
    Initializer, Literal, Outcome, Program, Quantifier, Theorem, TopLevel, Transform,
    TransformArgument, TransformArgumentValue, Type, TypeDefiner, TypeDefinition, TypeProduct,
    TypeRecursion, TypeSubset, TypeSum, TypedVariable,
};
use acl2_sexpr::Value;
use std::fmt;

macro_rules! nodes {
    (
        families { $($family:ident),* $(,)? }
        kinds { $($kind:ident),* $(,)? }
    ) => {
        /// Any node, as returned by [`registry::build`].
        ///
        /// Members of a family are wrapped in the family type, so a decoded
        /// `MAKE-TYPE-MAP` form is `Node::Type(Type::Map(..))`.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Node {
            $($family($family),)*
            $($kind($kind),)*
        }

        impl Node {
            /// Name of the maker function that constructs this node.
            pub fn maker(&self) -> &'static str {
                match self {
                    $(Node::$family(inner) => inner.maker(),)*
                    $(Node::$kind(inner) => inner.maker(),)*
                }
            }
        }

        impl ToSexpr for Node {
            fn to_sexpr(&self) -> Value {
                match self {
                    $(Node::$family(inner) => inner.to_sexpr(),)*
                    $(Node::$kind(inner) => inner.to_sexpr(),)*
                }
            }
        }

        $(
            impl From<$family> for Node {
                fn from(value: $family) -> Self {
                    Node::$family(value)
                }
            }

            impl TryFrom<Node> for $family {
                type Error = Node;

                fn try_from(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$family(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*

        $(
            impl From<$kind> for Node {
                fn from(value: $kind) -> Self {
                    Node::$kind(value)
                }
            }

            impl TryFrom<Node> for $kind {
                type Error = Node;

                fn try_from(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$kind(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*

        pub(crate) fn register_all(registry: &mut Registry) {
            $(registry.register_family::<$family>();)*
            $(registry.register::<$kind>();)*
        }
    };
}

nodes! {
    families {
        Expression,
        FunctionDefiner,
        FunctionSpecifier,
        Literal,
        Outcome,
        Quantifier,
        TopLevel,
        TransformArgumentValue,
        Type,
        TypeDefiner,
    }
    kinds {
        Alternative,
        Branch,
        Field,
        FunctionDefinition,
        FunctionHeader,
        FunctionRecursion,
        FunctionSpecification,
        Identifier,
        Initializer,
        Program,
        Theorem,
        Transform,
        TransformArgument,
        TypeDefinition,
        TypedVariable,
        TypeProduct,
        TypeRecursion,
        TypeSubset,
        TypeSum,
    }
}

impl FromSexpr for Node {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        registry::build(value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}
