//! Function definitions, specifications and theorems.
use crate::{Expression, FromSexpr, Identifier, ToSexpr, TypedVariable};

/// Whether a quantified definer ranges over all or some values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "quantifier")]
pub enum Quantifier {
    #[sexpr(maker = "MAKE-QUANTIFIER-EXISTS")]
    Exists,
    #[sexpr(maker = "MAKE-QUANTIFIER-FORALL")]
    Forall,
}

/// The name and signature of a function.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-HEADER")]
pub struct FunctionHeader {
    pub name: Identifier,
    pub inputs: Vec<TypedVariable>,
    pub outputs: Vec<TypedVariable>,
}

/// How a function computes its result.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "function definer")]
pub enum FunctionDefiner {
    Quantified(FunctionDefinerQuantified),
    Regular(FunctionDefinerRegular),
}

/// A body, with a termination measure if the function is recursive.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-DEFINER-REGULAR")]
pub struct FunctionDefinerRegular {
    pub body: Expression,
    pub measure: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-DEFINER-QUANTIFIED")]
pub struct FunctionDefinerQuantified {
    pub quantifier: Quantifier,
    pub variables: Vec<TypedVariable>,
    pub matrix: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-DEFINITION")]
pub struct FunctionDefinition {
    pub header: FunctionHeader,
    pub precondition: Option<Expression>,
    pub postcondition: Option<Expression>,
    pub definer: FunctionDefiner,
}

/// Mutually recursive function definitions.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-RECURSION")]
pub struct FunctionRecursion {
    pub definitions: Vec<FunctionDefinition>,
}

/// The constraint a specification places on its functions.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "function specifier")]
pub enum FunctionSpecifier {
    InputOutput(FunctionSpecifierInputOutput),
    Quantified(FunctionSpecifierQuantified),
    Regular(FunctionSpecifierRegular),
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-SPECIFIER-REGULAR")]
pub struct FunctionSpecifierRegular {
    pub body: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-SPECIFIER-QUANTIFIED")]
pub struct FunctionSpecifierQuantified {
    pub quantifier: Quantifier,
    pub variables: Vec<TypedVariable>,
    pub matrix: Expression,
}

/// A relation between the inputs and outputs of the specified function.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-SPECIFIER-INPUT-OUTPUT")]
pub struct FunctionSpecifierInputOutput {
    pub relation: Expression,
}

/// Second-order specification of one or more functions.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-FUNCTION-SPECIFICATION")]
pub struct FunctionSpecification {
    pub name: Identifier,
    pub functions: Vec<FunctionHeader>,
    pub specifier: FunctionSpecifier,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-THEOREM")]
pub struct Theorem {
    pub name: Identifier,
    pub variables: Vec<TypedVariable>,
    pub formula: Expression,
}
