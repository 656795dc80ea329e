//! The `interpret` command: type a program in, then run it.

use std::io::{self, BufRead};

use s_eval::{
    stdout_handler, terminal_handler, SharedInputHandler, SharedPrintHandler,
};
use s_parse::Program;

use super::{run_program, CommandStatus, RunOptions};

pub const ENTRY_BANNER: &str = "Enter your S program, finish with an empty line:";
pub const NO_PROGRAM: &str = "No program entered. Exiting.";

/// Collect program lines until a blank line or end of input.
///
/// Takes the reader by value so a locked stdin is released before the
/// program runs and `writeinput` needs it.
pub fn read_program<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Read a program from `reader` and run it.
pub fn interpret<R: BufRead>(
    reader: R,
    options: &RunOptions,
    print: SharedPrintHandler,
    input: SharedInputHandler,
) -> CommandStatus {
    print.println(ENTRY_BANNER);
    let lines = match read_program(reader) {
        Ok(lines) => lines,
        Err(e) => {
            print.println(&format!("Error: {e}"));
            return CommandStatus::Failure;
        }
    };

    if lines.is_empty() {
        print.println(NO_PROGRAM);
        return CommandStatus::Success;
    }

    run_program(&Program::parse(&lines), options, print, input)
}

/// Read a program from stdin and run it against the terminal.
pub fn interpret_stdin(options: &RunOptions) -> CommandStatus {
    interpret(
        io::stdin().lock(),
        options,
        stdout_handler(),
        terminal_handler(),
    )
}
