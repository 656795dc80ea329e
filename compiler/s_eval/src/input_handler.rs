//! Where `writeinput` reads from.
//!
//! Mirrors the print handler: enum dispatch behind an `Arc`, with a real
//! terminal source for the CLI and a scripted source for tests.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::errors::FatalError;

/// Controlling terminal used when stdin is redirected.
#[cfg(not(windows))]
const TTY_PATH: &str = "/dev/tty";
#[cfg(windows)]
const TTY_PATH: &str = "CONIN$";

/// Reads from stdin when it is a terminal, otherwise from the controlling
/// terminal.
#[derive(Default)]
pub struct TerminalInputHandler;

impl TerminalInputHandler {
    pub fn read_line(&self, prompt: &str) -> Result<String, FatalError> {
        Self::read_interactive(prompt).map_err(FatalError::InputUnavailable)
    }

    fn read_interactive(prompt: &str) -> io::Result<String> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            show_prompt(prompt)?;
            return read_trimmed(&mut stdin.lock())?.ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed")
            });
        }

        debug!(path = TTY_PATH, "stdin is not a terminal; opening tty");
        let tty = File::open(TTY_PATH)?;
        show_prompt(prompt)?;
        read_tty_line(&mut BufReader::new(tty))
    }
}

fn show_prompt(prompt: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{prompt} ")?;
    out.flush()
}

/// One line without its terminator, or `None` at EOF.
fn read_trimmed(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// A line from the controlling terminal. EOF reads as an empty answer.
fn read_tty_line(reader: &mut impl BufRead) -> io::Result<String> {
    let line = read_trimmed(reader)?;
    if line.is_none() {
        debug!("tty reached EOF; answering with an empty line");
    }
    Ok(line.unwrap_or_default())
}

/// Serves pre-supplied answers in order and records every prompt.
#[derive(Default)]
pub struct ScriptedInputHandler {
    answers: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInputHandler {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInputHandler {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Next answer; running out behaves like a closed terminal.
    pub fn read_line(&self, prompt: &str) -> Result<String, FatalError> {
        self.prompts.lock().push(prompt.to_string());
        self.answers.lock().pop_front().ok_or_else(|| {
            FatalError::InputUnavailable(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scripted input left",
            ))
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

/// Input source.
pub enum InputHandlerImpl {
    Terminal(TerminalInputHandler),
    Scripted(ScriptedInputHandler),
    /// Every read fails.
    Unavailable,
}

impl InputHandlerImpl {
    /// Show `prompt` and read one line.
    pub fn read_line(&self, prompt: &str) -> Result<String, FatalError> {
        match self {
            Self::Terminal(h) => h.read_line(prompt),
            Self::Scripted(h) => h.read_line(prompt),
            Self::Unavailable => Err(FatalError::InputUnavailable(io::Error::new(
                io::ErrorKind::NotFound,
                "no input source configured",
            ))),
        }
    }

    /// Prompts seen so far; only the scripted source records them.
    pub fn prompts(&self) -> Vec<String> {
        match self {
            Self::Scripted(h) => h.prompts(),
            Self::Terminal(_) | Self::Unavailable => Vec::new(),
        }
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn terminal_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Terminal(TerminalInputHandler))
}

pub fn scripted_handler<I, S>(answers: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(answers)))
}

pub fn unavailable_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Unavailable)
}
