//! Execution engine.
//!
//! Walks a `Program` line by line. Each interpreter owns its variables,
//! last input and call stack; a function call builds a child interpreter
//! from copies of all three and runs the body range in place, so nothing
//! flows back to the caller.
//!
//! Recoverable failures become a `LineDiagnostic` printed through the
//! print handler. Only `FatalError` leaves `run`.

mod builder;

use std::ops::Range;

use s_ir::{Instruction, Value};
use s_parse::Program;
use tracing::{debug, trace};

use crate::call_stack::{ensure_sufficient_stack, CallFrame, CallStack};
use crate::diagnostics::{DiagnosticKind, LineDiagnostic};
use crate::environment::Environment;
use crate::errors::FatalError;
use crate::expr::{evaluate, substitute_literal};
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;

pub use builder::InterpreterBuilder;

/// Where the cursor goes after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Next,
    /// A false `if`: skip until its `end`.
    SkipBlock,
}

/// Why a line did not complete.
#[derive(Debug)]
enum Failure {
    /// Reported, then execution moves on.
    Line(DiagnosticKind),
    /// Stops every interpreter up the call chain.
    Fatal(FatalError),
}

impl From<FatalError> for Failure {
    fn from(err: FatalError) -> Self {
        Failure::Fatal(err)
    }
}

/// Interpreter for one program, or one function body within it.
pub struct Interpreter<'p> {
    program: &'p Program,
    env: Environment,
    last_input: String,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
    call_stack: CallStack,
}

impl<'p> Interpreter<'p> {
    /// Execute the whole program from its first line.
    pub fn run(&mut self) -> Result<(), FatalError> {
        self.execute(0..self.program.len())
    }

    /// Execute the lines in `range`.
    ///
    /// Skip state is local to this call: a function body that ends inside a
    /// false `if` does not leak skipping into its caller.
    pub fn execute(&mut self, range: Range<usize>) -> Result<(), FatalError> {
        let program = self.program;
        let mut skip_stack: Vec<usize> = Vec::new();
        let mut idx = range.start;

        while idx < range.end {
            let Some(instruction) = program.instruction(idx) else {
                idx += 1;
                continue;
            };

            // Definitions are inert and jumped over even inside a false block.
            if let Instruction::FuncDef(_) = instruction {
                idx = program.matching_end(idx) + 1;
                continue;
            }

            if !skip_stack.is_empty() {
                match instruction {
                    Instruction::If { .. } => skip_stack.push(idx),
                    Instruction::End => {
                        skip_stack.pop();
                    }
                    _ => {}
                }
                idx += 1;
                continue;
            }

            match self.dispatch(idx, instruction) {
                Ok(Flow::Next) => idx += 1,
                Ok(Flow::SkipBlock) => {
                    skip_stack.push(idx);
                    idx += 1;
                }
                Err(Failure::Line(kind)) => {
                    self.report(LineDiagnostic::new(idx + 1, kind));
                    idx += 1;
                }
                Err(Failure::Fatal(err)) => return Err(err),
            }
        }

        if !skip_stack.is_empty() {
            trace!(open = skip_stack.len(), "range ended inside skipped block");
        }
        Ok(())
    }

    fn dispatch(&mut self, idx: usize, instruction: &Instruction) -> Result<Flow, Failure> {
        match instruction {
            Instruction::CallFunc(name) => {
                self.call_function(name, idx)?;
                Ok(Flow::Next)
            }
            Instruction::If { name, literal } => {
                let taken = self
                    .env
                    .get(name)
                    .is_some_and(|value| value.matches_literal(literal));
                Ok(if taken { Flow::Next } else { Flow::SkipBlock })
            }
            // Definitions never reach here; `execute` steps over them.
            Instruction::FuncDef(_) | Instruction::End => Ok(Flow::Next),
            Instruction::WriteInput(prompt) => {
                self.last_input = self.input_handler.read_line(prompt)?;
                Ok(Flow::Next)
            }
            Instruction::Img(url) => {
                self.print_handler.println(&format!("[Image: {url}]"));
                Ok(Flow::Next)
            }
            Instruction::WriteSystemInput => {
                self.print_handler.println(&self.last_input);
                Ok(Flow::Next)
            }
            Instruction::WriteVar(name) => match self.env.get(name) {
                Some(value) => {
                    self.print_handler.println(&value.to_string());
                    Ok(Flow::Next)
                }
                None => Err(Failure::Line(DiagnosticKind::VariableNotFound {
                    name: name.clone(),
                })),
            },
            Instruction::WriteExpr(expr) => {
                let value = evaluate(expr, &self.env, &self.last_input)
                    .map_err(|err| Failure::Line(DiagnosticKind::Expression(err)))?;
                self.print_handler.println(&value.to_string());
                Ok(Flow::Next)
            }
            Instruction::WriteLiteral(text) => {
                self.print_handler
                    .println(&substitute_literal(text, &self.env));
                Ok(Flow::Next)
            }
            Instruction::AssignFromInput(name) => {
                self.env.set(name.as_str(), Value::string(self.last_input.as_str()));
                Ok(Flow::Next)
            }
            Instruction::AssignFromExpr { name, expr } => {
                let value = evaluate(expr, &self.env, &self.last_input).map_err(|error| {
                    Failure::Line(DiagnosticKind::Assignment {
                        name: name.clone(),
                        error,
                    })
                })?;
                self.env.set(name.as_str(), value);
                Ok(Flow::Next)
            }
            Instruction::AssignLiteral { name, value } => {
                self.env.set(name.as_str(), Value::string(value.as_str()));
                Ok(Flow::Next)
            }
            Instruction::Error(line_text) => Err(Failure::Line(DiagnosticKind::InvalidSyntax {
                line_text: line_text.clone(),
            })),
        }
    }

    /// Run a function body in a child interpreter built from copies of this
    /// one's state.
    #[tracing::instrument(level = "debug", skip(self), fields(depth = self.call_stack.depth()))]
    fn call_function(&mut self, name: &str, idx: usize) -> Result<(), Failure> {
        let Some(body) = self.program.functions().get(name) else {
            return Err(Failure::Line(DiagnosticKind::FunctionNotFound {
                name: name.to_string(),
            }));
        };

        let mut call_stack = self.call_stack.clone();
        call_stack
            .push(CallFrame {
                name: name.to_string(),
                call_line: idx + 1,
            })
            .map_err(|err| Failure::Line(DiagnosticKind::Runtime(err)))?;

        debug!(start = body.start, end = body.end, "entering function body");

        let mut child = Interpreter {
            program: self.program,
            env: self.env.clone(),
            last_input: self.last_input.clone(),
            print_handler: self.print_handler.clone(),
            input_handler: self.input_handler.clone(),
            call_stack,
        };
        ensure_sufficient_stack(|| child.execute(body.as_range()))?;
        Ok(())
    }

    fn report(&self, diagnostic: LineDiagnostic) {
        debug!(line = diagnostic.line, "line failed");
        self.print_handler.println(&diagnostic.to_string());
    }

    /// Current variables.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Most recent `writeinput` answer, empty if none.
    pub fn last_input(&self) -> &str {
        &self.last_input
    }
}

#[cfg(test)]
mod tests;
