//! Error types for expression evaluation and function calls.
//!
//! `EvalErrorKind` carries the structured category; factory functions
//! (e.g. `division_by_zero()`) are the public way to build an `EvalError`
//! and keep `message` equal to the kind's `Display` output.
//!
//! These errors never escape a line: the interpreter turns them into a
//! `LineDiagnostic` and moves on. The one fatal condition lives in
//! `FatalError`.

use std::fmt;
use std::io;

/// Result of evaluating an expression.
pub type EvalResult<T> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Substitution
    UndefinedVariable {
        name: String,
    },

    // Arithmetic
    InvalidCharacters,
    MalformedExpression {
        detail: String,
    },
    DivisionByZero,
    IntegerOverflow {
        operation: String,
    },
    NotANumber,

    // Calls
    RecursionLimit {
        depth: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'"),

            Self::InvalidCharacters => {
                write!(f, "Invalid characters or syntax in arithmetic expression.")
            }
            Self::MalformedExpression { detail } => {
                write!(f, "Could not evaluate expression: {detail}")
            }
            Self::DivisionByZero => write!(f, "Could not evaluate expression: division by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "Could not evaluate expression: integer overflow in {operation}")
            }
            Self::NotANumber => write!(
                f,
                "Could not evaluate expression: Expression did not evaluate to a valid number."
            ),

            Self::RecursionLimit { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }

        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory-built errors.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

pub fn invalid_characters() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCharacters)
}

pub fn malformed_expression(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedExpression {
        detail: detail.into(),
    })
}

pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

pub fn not_a_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotANumber)
}

pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { depth })
}

/// Errors that stop the whole program.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// `writeinput` ran with no interactive source to read from.
    #[error("No interactive input possible (no terminal found). Exiting.")]
    InputUnavailable(#[source] io::Error),
}
