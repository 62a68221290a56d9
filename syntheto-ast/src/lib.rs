//! Abstract syntax of Syntheto and its exchange with ACL2.
//!
//! Every node is written as a call of its maker function, with the fields as
//! keyword arguments in a fixed order:
//!
//! ```text
//! (SYNTHETO::MAKE-EXPRESSION-BINARY
//!   :OPERATOR (SYNTHETO::MAKE-BINARY-OP-LT)
//!   :LEFT-OPERAND (SYNTHETO::MAKE-EXPRESSION-VARIABLE :NAME (SYNTHETO::MAKE-IDENTIFIER :NAME "x"))
//!   :RIGHT-OPERAND (SYNTHETO::MAKE-EXPRESSION-LITERAL :GET (SYNTHETO::MAKE-LITERAL-INTEGER :VALUE 10)))
//! ```
//!
//! Node types implement [`ToSexpr`] and [`FromSexpr`], usually through the
//! derive macros of the same name. Forms whose kind is not known in advance
//! can be decoded into a [`Node`] with [`build`].
extern crate self as syntheto_ast;

pub mod error;
pub mod expression;
pub mod function;
mod identifier;
pub mod literal;
mod node;
mod operator;
pub mod outcome;
pub mod protocol;
pub mod registry;
pub mod toplevel;
pub mod transform;
pub mod types;

pub use acl2_sexpr as sexpr;
pub use error::{DecodeError, DecodeErrorKind, Error};
pub use expression::{Branch, Expression, Initializer, TypedVariable};
pub use function::{
    FunctionDefiner, FunctionDefinition, FunctionHeader, FunctionRecursion,
    FunctionSpecification, FunctionSpecifier, Quantifier, Theorem,
};
pub use identifier::Identifier;
pub use literal::Literal;
pub use node::Node;
pub use operator::{BinaryOp, UnaryOp};
pub use outcome::Outcome;
pub use protocol::{FromSexpr, ToSexpr};
pub use registry::{build, registry, Registry};
pub use syntheto_ast_macros::{FromSexpr, ToSexpr};
pub use toplevel::{Program, TopLevel};
pub use transform::{Transform, TransformArgument, TransformArgumentValue};
pub use types::{
    Alternative, Field, Type, TypeDefiner, TypeDefinition, TypeProduct, TypeRecursion,
    TypeSubset, TypeSum,
};

/// Write a node as a single line of text.
pub fn to_string<T: ToSexpr + ?Sized>(node: &T) -> String {
    sexpr::to_string(&node.to_sexpr())
}

/// Write a node as indented text, breaking lines longer than `width`.
pub fn to_string_pretty<T: ToSexpr + ?Sized>(node: &T, width: usize) -> String {
    sexpr::to_string_pretty(&node.to_sexpr(), width)
}

/// Read a single node of type `T` from text.
pub fn from_str<T: FromSexpr>(source: &str) -> Result<T, Error> {
    let value = sexpr::from_str(source)?;
    Ok(T::from_sexpr(&value)?)
}
