//! Command handlers for the `s` CLI.
//!
//! Handlers write through a print handler and return a `CommandStatus`
//! instead of exiting, so the binary decides the process exit code and
//! tests can drive them with buffers.

use std::io;

use s_eval::DEFAULT_MAX_CALL_DEPTH;

mod help;
mod interpret;
mod run;

pub use help::{language_help, print_language_help};
pub use interpret::{interpret, interpret_stdin, read_program, ENTRY_BANNER, NO_PROGRAM};
pub use run::{run_file, run_file_with, run_program};

/// Outcome of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
}

impl CommandStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandStatus::Success => 0,
            CommandStatus::Failure => 1,
        }
    }
}

/// Options shared by `run` and `interpret`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum function call nesting; `None` is unlimited.
    pub max_call_depth: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

/// Split `args` into run options and positional arguments.
///
/// Recognizes `--max-depth=<n>`, where `0` removes the limit. Any other
/// argument starting with `--` is an error.
pub fn parse_run_options(args: &[String]) -> Result<(RunOptions, Vec<&str>), String> {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth: usize = value
                .parse()
                .map_err(|_| format!("invalid value for --max-depth: '{value}'"))?;
            options.max_call_depth = (depth > 0).then_some(depth);
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.as_str());
        }
    }

    Ok((options, positional))
}

/// Read a program file, describing failures for the user.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
