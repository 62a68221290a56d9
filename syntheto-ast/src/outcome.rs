//! Results reported back by the prover for each submitted top-level construct.
use crate::{Expression, FromSexpr, ToSexpr, TopLevel};
use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "outcome")]
pub enum Outcome {
    FunctionSuccess(FunctionSuccess),
    ProofObligationFailure(ProofObligationFailure),
    SpecificationSuccess(SpecificationSuccess),
    TheoremFailure(TheoremFailure),
    TheoremSuccess(TheoremSuccess),
    TransformationFailure(TransformationFailure),
    TransformationSuccess(TransformationSuccess),
    TypeSuccess(TypeSuccess),
    UnexpectedFailure(UnexpectedFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-FUNCTION-SUCCESS")]
pub struct FunctionSuccess {
    pub message: SmolStr,
}

/// A proof obligation that could not be discharged.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-PROOF-OBLIGATION-FAILURE")]
pub struct ProofObligationFailure {
    pub message: SmolStr,
    pub obligation_expr: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-SPECIFICATION-SUCCESS")]
pub struct SpecificationSuccess {
    pub message: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-THEOREM-FAILURE")]
pub struct TheoremFailure {
    pub message: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-THEOREM-SUCCESS")]
pub struct TheoremSuccess {
    pub message: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-TRANSFORMATION-FAILURE")]
pub struct TransformationFailure {
    pub message: SmolStr,
}

/// The top-level constructs produced by a transformation.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-TRANSFORMATION-SUCCESS")]
pub struct TransformationSuccess {
    pub message: SmolStr,
    pub toplevels: Vec<TopLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-TYPE-SUCCESS")]
pub struct TypeSuccess {
    pub message: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-OUTCOME-UNEXPECTED-FAILURE")]
pub struct UnexpectedFailure {
    pub message: SmolStr,
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::FunctionSuccess(outcome) => &outcome.message,
            Outcome::ProofObligationFailure(outcome) => &outcome.message,
            Outcome::SpecificationSuccess(outcome) => &outcome.message,
            Outcome::TheoremFailure(outcome) => &outcome.message,
            Outcome::TheoremSuccess(outcome) => &outcome.message,
            Outcome::TransformationFailure(outcome) => &outcome.message,
            Outcome::TransformationSuccess(outcome) => &outcome.message,
            Outcome::TypeSuccess(outcome) => &outcome.message,
            Outcome::UnexpectedFailure(outcome) => &outcome.message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::ProofObligationFailure(_)
                | Outcome::TheoremFailure(_)
                | Outcome::TransformationFailure(_)
                | Outcome::UnexpectedFailure(_)
        )
    }
}
