//! Per-line diagnostics.
//!
//! Every recoverable failure is reported as one `LineDiagnostic` through the
//! print handler, then execution continues with the next line. The
//! `Display` impl is the exact text the user sees.

use std::fmt;

use crate::errors::EvalError;

/// What went wrong on a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line matched no grammar.
    InvalidSyntax { line_text: String },
    /// `write (name)` for an undefined variable.
    VariableNotFound { name: String },
    /// `<name>` for an undefined function.
    FunctionNotFound { name: String },
    /// `write (<expr>)` failed to evaluate.
    Expression(EvalError),
    /// `name (<expr>)` failed to evaluate; the variable is left unchanged.
    Assignment { name: String, error: EvalError },
    /// Any other failure caught at the line boundary.
    Runtime(EvalError),
}

/// A failure tied to a 1-based source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl LineDiagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        LineDiagnostic { line, kind }
    }
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line;
        match &self.kind {
            DiagnosticKind::InvalidSyntax { line_text } => write!(
                f,
                "Error on line {line}: Invalid syntax or unrecognized command: \"{line_text}\""
            ),
            DiagnosticKind::VariableNotFound { name } => {
                write!(f, "Error: Variable '{name}' not found (Line {line})")
            }
            DiagnosticKind::FunctionNotFound { name } => {
                write!(f, "Error: Function <{name}> not found (Line {line})")
            }
            DiagnosticKind::Expression(error) => write!(f, "Error: {error} (Line {line})"),
            DiagnosticKind::Assignment { name, error } => {
                write!(f, "Error assigning to '{name}': {error} (Line {line})")
            }
            DiagnosticKind::Runtime(error) => write!(f, "Error on line {line}: {error}"),
        }
    }
}
