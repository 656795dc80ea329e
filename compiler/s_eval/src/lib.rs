//! S Eval - expression evaluation and execution for S programs.
//!
//! # Architecture
//!
//! - `expr`: `(name)` substitution, `++` concatenation, and a small
//!   precedence parser for `+ - * /` over `Number`
//! - `interpreter`: the line-dispatch loop, conditional skipping, and
//!   copy-in function calls
//! - `print_handler` / `input_handler`: pluggable output and `writeinput`
//!   sources (stdout/terminal for the CLI, buffers/scripts for tests)
//! - `call_stack`: call depth limit and native stack growth
//!
//! # Errors
//!
//! Everything that can go wrong on a line is reported as a
//! [`LineDiagnostic`] and execution continues. The only error that stops a
//! program is [`FatalError`], returned from [`Interpreter::run`].

mod call_stack;
mod diagnostics;
mod environment;
pub mod errors;
mod expr;
mod input_handler;
mod interpreter;
mod print_handler;

pub use call_stack::{ensure_sufficient_stack, DEFAULT_MAX_CALL_DEPTH};
pub use diagnostics::{DiagnosticKind, LineDiagnostic};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult, FatalError};
pub use expr::{
    evaluate, evaluate_arithmetic, substitute_identifiers, substitute_literal, BinaryOp,
    CONCAT_TOKEN, INPUT_TOKEN,
};
pub use input_handler::{
    scripted_handler, terminal_handler, unavailable_handler, InputHandlerImpl,
    ScriptedInputHandler, SharedInputHandler, TerminalInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};

use s_parse::Program;

/// Parse `source` and run it with the given handlers and the default call
/// depth limit.
pub fn run_source(
    source: &str,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
) -> Result<(), FatalError> {
    let program = Program::from_source(source);
    InterpreterBuilder::new(&program)
        .print_handler(print_handler)
        .input_handler(input_handler)
        .build()
        .run()
}
