//! Errors raised while turning s-expressions into abstract syntax.
use acl2_sexpr::{ParseError, Symbol};
use thiserror::Error;

/// A form could not be decoded into a node.
///
/// Failures inside a keyword argument are wrapped in [`DecodeError::Field`]
/// once per enclosing form. Use [`DecodeError::kind`] or
/// [`DecodeError::innermost`] to get at the underlying failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The form does not have the layout its maker requires: wrong arity,
    /// an unexpected keyword, or a value of the wrong kind.
    #[error("malformed {context}: {message}")]
    Shape { context: String, message: String },

    /// The head of the form is not a registered maker.
    #[error("unknown maker `{0}`")]
    UnknownMaker(Symbol),

    /// A registered maker appeared where a different kind of node was expected.
    #[error("expected {expected}, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: Symbol,
    },

    /// The form is well shaped but one of its values is not allowed.
    #[error("invalid {what}: {message}")]
    ValueConstraint { what: String, message: String },

    /// Context for an error inside the value of a keyword argument. Never
    /// the innermost error.
    #[error("in :{keyword} of {maker}: {source}")]
    Field {
        maker: &'static str,
        keyword: &'static str,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub fn shape(context: impl Into<String>, message: impl Into<String>) -> Self {
        DecodeError::Shape {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn value_constraint(what: impl Into<String>, message: impl Into<String>) -> Self {
        DecodeError::ValueConstraint {
            what: what.into(),
            message: message.into(),
        }
    }

    /// Attach the maker and keyword whose value failed to decode.
    pub fn within(self, maker: &'static str, keyword: &'static str) -> Self {
        DecodeError::Field {
            maker,
            keyword,
            source: Box::new(self),
        }
    }

    /// The error without any field context.
    pub fn innermost(&self) -> &DecodeError {
        match self {
            DecodeError::Field { source, .. } => source.innermost(),
            other => other,
        }
    }

    /// The kind of the underlying failure, looking through field context.
    pub fn kind(&self) -> DecodeErrorKind {
        match self.innermost() {
            DecodeError::Shape { .. } => DecodeErrorKind::Shape,
            DecodeError::UnknownMaker(_) => DecodeErrorKind::UnknownMaker,
            DecodeError::TypeMismatch { .. } => DecodeErrorKind::TypeMismatch,
            DecodeError::ValueConstraint { .. } => DecodeErrorKind::ValueConstraint,
            DecodeError::Field { source, .. } => source.kind(),
        }
    }

    /// Keyword path from the outermost form to the failing value.
    pub fn path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut error = self;
        while let DecodeError::Field {
            keyword, source, ..
        } = error
        {
            path.push(*keyword);
            error = source.as_ref();
        }
        path
    }
}

/// The kind of the innermost failure of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    Shape,
    UnknownMaker,
    TypeMismatch,
    ValueConstraint,
}

/// Error while reading abstract syntax from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ParseError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
