use thiserror::Error;

/// Coarse classification of an [`Error`], for callers that only care about
/// which kind of mistake was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A literal that isn't a valid number or an operand a solver refuses.
    InvalidOperand,
    /// Nothing at the current input position is a token.
    InvalidSyntax,
    /// The tokens don't form a well-nested, fully-consumed expression.
    InvalidExpression,
    /// A solver was invoked with the wrong number or kind of operands.
    InvalidOperation,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid operand: {0}")]
    InvalidOperand(String),
    #[error("invalid syntax: no valid token found at {offset}: {rest:?}")]
    InvalidSyntax { offset: usize, rest: String },
    #[error("invalid expression: unclosed parenthesis")]
    UnclosedParen,
    #[error("invalid expression: too many close parenthesis")]
    UnmatchedParen,
    #[error("invalid expression: insufficient operands {needed} != {found}")]
    InsufficientOperands { needed: usize, found: usize },
    #[error("invalid expression: not all operands consumed ({0} left)")]
    UnconsumedOperands(usize),
    #[error("invalid expression: nesting deeper than {0} levels")]
    TooDeep(usize),
    #[error("invalid expression: unexpected token {0}")]
    UnexpectedToken(String),
    #[error("invalid operation: invalid number of operands {expected} != {received}")]
    OperandCount { expected: usize, received: usize },
    #[error("invalid operation: operand type mismatch")]
    OperandTypeMismatch,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidOperand(_) => ErrorKind::InvalidOperand,
            Error::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
            Error::UnclosedParen
            | Error::UnmatchedParen
            | Error::InsufficientOperands { .. }
            | Error::UnconsumedOperands(_)
            | Error::TooDeep(_)
            | Error::UnexpectedToken(_) => ErrorKind::InvalidExpression,
            Error::OperandCount { .. } | Error::OperandTypeMismatch => ErrorKind::InvalidOperation,
        }
    }

    pub(crate) fn cannot_parse(literal: &str) -> Error {
        Error::InvalidOperand(format!("cannot parse {:?}", literal))
    }

    pub(crate) fn overflow(op: char) -> Error {
        Error::InvalidOperand(format!("integer overflow in '{}'", op))
    }
}
