//! `InterpreterBuilder` for configuring an `Interpreter`.

use s_parse::Program;

use super::Interpreter;
use crate::call_stack::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::environment::Environment;
use crate::input_handler::{terminal_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for `Interpreter`.
///
/// Defaults: stdout output, terminal input, empty variables, empty last
/// input, and a call depth limit of [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder<'p> {
    program: &'p Program,
    env: Option<Environment>,
    last_input: String,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    max_call_depth: Option<usize>,
}

impl<'p> InterpreterBuilder<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            env: None,
            last_input: String::new(),
            print_handler: None,
            input_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set the initial variables.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the initial last input.
    #[must_use]
    pub fn last_input(mut self, last_input: impl Into<String>) -> Self {
        self.last_input = last_input.into();
        self
    }

    /// Where `write`, `img` and diagnostics go.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Where `writeinput` reads from.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Maximum nesting of function calls; `None` removes the limit.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'p> {
        Interpreter {
            program: self.program,
            env: self.env.unwrap_or_default(),
            last_input: self.last_input,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(terminal_handler),
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}
