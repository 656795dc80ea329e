//! A classified program ready for execution.

use s_ir::{FunctionTable, Instruction};

use crate::{classify, matching_end, scan_functions};

/// One instruction slot per source line, plus the function table.
///
/// Lines are classified once here; the interpreter only indexes into the
/// result. Indices are 0-based; diagnostics add one.
#[derive(Clone, Debug)]
pub struct Program {
    instructions: Vec<Option<Instruction>>,
    functions: FunctionTable,
}

impl Program {
    /// Classify a sequence of source lines.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Self {
        let instructions: Vec<_> = lines.iter().map(|line| classify(line.as_ref())).collect();
        let functions = scan_functions(&instructions);
        Program {
            instructions,
            functions,
        }
    }

    /// Split source text into lines and classify them.
    pub fn from_source(source: &str) -> Self {
        Self::parse(&split_lines(source))
    }

    /// Number of source lines (including blank and comment lines).
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction on line `idx`, or `None` for blank/comment lines
    /// and out-of-range indices.
    #[inline]
    pub fn instruction(&self, idx: usize) -> Option<&Instruction> {
        self.instructions.get(idx).and_then(Option::as_ref)
    }

    #[inline]
    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Index of the `end` matching a `func` line (see [`matching_end`]).
    pub fn matching_end(&self, def_index: usize) -> usize {
        matching_end(&self.instructions, def_index)
    }
}

/// Characters that end a source line. `\r\n` counts as a single break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `source` at every line break. A break at the very end does not
/// produce a trailing empty line.
fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = source.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&source[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }
    if start < source.len() {
        lines.push(&source[start..]);
    }
    lines
}
