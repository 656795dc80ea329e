//! The `run` command: execute an S program file.

use s_eval::{
    stdout_handler, terminal_handler, InterpreterBuilder, SharedInputHandler, SharedPrintHandler,
};
use s_parse::Program;
use tracing::debug;

use super::{read_file, CommandStatus, RunOptions};

/// Run a file with stdout output and terminal input.
pub fn run_file(path: &str, options: &RunOptions) -> CommandStatus {
    run_file_with(path, options, stdout_handler(), terminal_handler())
}

/// Run a file with the given handlers.
pub fn run_file_with(
    path: &str,
    options: &RunOptions,
    print: SharedPrintHandler,
    input: SharedInputHandler,
) -> CommandStatus {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            print.println(&format!("Error: {msg}"));
            return CommandStatus::Failure;
        }
    };
    let program = Program::from_source(&source);
    debug!(
        path,
        lines = program.len(),
        functions = program.functions().len(),
        "loaded program"
    );
    run_program(&program, options, print, input)
}

/// Execute a parsed program, reporting a fatal error as the last output.
pub fn run_program(
    program: &Program,
    options: &RunOptions,
    print: SharedPrintHandler,
    input: SharedInputHandler,
) -> CommandStatus {
    let result = InterpreterBuilder::new(program)
        .print_handler(print.clone())
        .input_handler(input)
        .max_call_depth(options.max_call_depth)
        .build()
        .run();

    match result {
        Ok(()) => CommandStatus::Success,
        Err(err) => {
            print.println("");
            print.println(&format!("Error: {err}"));
            CommandStatus::Failure
        }
    }
}
