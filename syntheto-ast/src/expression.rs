//! Expressions.
use crate::{BinaryOp, FromSexpr, Identifier, Literal, ToSexpr, Type, UnaryOp};

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(family = "expression")]
pub enum Expression {
    Binary(ExpressionBinary),
    Bind(ExpressionBind),
    Call(ExpressionCall),
    Component(ExpressionComponent),
    Cond(ExpressionCond),
    If(ExpressionIf),
    Literal(ExpressionLiteral),
    Multi(ExpressionMulti),
    ProductConstruct(ExpressionProductConstruct),
    ProductField(ExpressionProductField),
    ProductUpdate(ExpressionProductUpdate),
    SumConstruct(ExpressionSumConstruct),
    SumField(ExpressionSumField),
    SumTest(ExpressionSumTest),
    SumUpdate(ExpressionSumUpdate),
    Unary(ExpressionUnary),
    Unless(ExpressionUnless),
    Variable(ExpressionVariable),
    When(ExpressionWhen),
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-BINARY")]
pub struct ExpressionBinary {
    pub operator: BinaryOp,
    pub left_operand: Box<Expression>,
    pub right_operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-TYPED-VARIABLE")]
pub struct TypedVariable {
    pub name: Identifier,
    #[sexpr(rename = "TYPE")]
    pub ty: Type,
}

/// Binds the components of `value` to `variables` within `body`.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-BIND")]
pub struct ExpressionBind {
    pub variables: Vec<TypedVariable>,
    pub value: Box<Expression>,
    pub body: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-CALL")]
pub struct ExpressionCall {
    pub function: Identifier,
    pub types: Vec<Type>,
    pub arguments: Vec<Expression>,
}

/// The component at `index` of a multi-valued expression.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-COMPONENT")]
pub struct ExpressionComponent {
    pub multi: Box<Expression>,
    pub index: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-BRANCH")]
pub struct Branch {
    pub condition: Expression,
    pub action: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-COND")]
pub struct ExpressionCond {
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-IF")]
pub struct ExpressionIf {
    pub test: Box<Expression>,
    pub then: Box<Expression>,
    #[sexpr(rename = "ELSE")]
    pub else_branch: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-UNLESS")]
pub struct ExpressionUnless {
    pub test: Box<Expression>,
    pub then: Box<Expression>,
    #[sexpr(rename = "ELSE")]
    pub else_branch: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-WHEN")]
pub struct ExpressionWhen {
    pub test: Box<Expression>,
    pub then: Box<Expression>,
    #[sexpr(rename = "ELSE")]
    pub else_branch: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-LITERAL")]
pub struct ExpressionLiteral {
    #[sexpr(rename = "GET")]
    pub literal: Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-MULTI")]
pub struct ExpressionMulti {
    pub arguments: Vec<Expression>,
}

/// A field name paired with the value it is set to.
#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-INITIALIZER")]
pub struct Initializer {
    pub field: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-PRODUCT-CONSTRUCT")]
pub struct ExpressionProductConstruct {
    #[sexpr(rename = "TYPE")]
    pub type_name: Identifier,
    pub fields: Vec<Initializer>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-PRODUCT-FIELD")]
pub struct ExpressionProductField {
    #[sexpr(rename = "TYPE")]
    pub type_name: Identifier,
    pub target: Box<Expression>,
    pub field: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-PRODUCT-UPDATE")]
pub struct ExpressionProductUpdate {
    #[sexpr(rename = "TYPE")]
    pub type_name: Identifier,
    pub target: Box<Expression>,
    pub fields: Vec<Initializer>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-SUM-CONSTRUCT")]
pub struct ExpressionSumConstruct {
    #[sexpr(rename = "TYPE")]
    pub type_name: Identifier,
    pub alternative: Identifier,
    pub fields: Vec<Initializer>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-SUM-FIELD")]
pub struct ExpressionSumField {
    #[sexpr(rename = "TYPE")]
    pub type_name: Identifier,
    pub target: Box<Expression>,
    pub alternative: Identifier,
    pub field: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-SUM-TEST")]
pub struct ExpressionSumTest {
    #[sexpr(rename = "TYPE")]
    pub type_name: Identifier,
    pub target: Box<Expression>,
    pub alternative: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-SUM-UPDATE")]
pub struct ExpressionSumUpdate {
    #[sexpr(rename = "TYPE")]
    pub type_name: Identifier,
    pub target: Box<Expression>,
    pub alternative: Identifier,
    pub fields: Vec<Initializer>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-UNARY")]
pub struct ExpressionUnary {
    pub operator: UnaryOp,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, ToSexpr, FromSexpr)]
#[sexpr(maker = "MAKE-EXPRESSION-VARIABLE")]
pub struct ExpressionVariable {
    pub name: Identifier,
}

impl Expression {
    pub fn literal(literal: Literal) -> Self {
        Expression::Literal(ExpressionLiteral { literal })
    }

    pub fn variable(name: Identifier) -> Self {
        Expression::Variable(ExpressionVariable { name })
    }

    pub fn binary(operator: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary(ExpressionBinary {
            operator,
            left_operand: Box::new(left),
            right_operand: Box::new(right),
        })
    }

    pub fn unary(operator: UnaryOp, operand: Expression) -> Self {
        Expression::Unary(ExpressionUnary {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn if_then_else(test: Expression, then: Expression, else_branch: Expression) -> Self {
        Expression::If(ExpressionIf {
            test: Box::new(test),
            then: Box::new(then),
            else_branch: Box::new(else_branch),
        })
    }

    pub fn call(function: Identifier, arguments: Vec<Expression>) -> Self {
        Expression::Call(ExpressionCall {
            function,
            types: Vec::new(),
            arguments,
        })
    }
}
