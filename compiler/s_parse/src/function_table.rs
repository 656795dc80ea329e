//! Function table pre-pass.
//!
//! Runs once over the whole program before execution. Only top-level
//! definitions are recorded: after a definition is found, scanning resumes
//! after its matching `end`, so definitions nested inside a body are part of
//! that body and are not indexed.

use s_ir::{BodyRange, FunctionTable, Instruction};
use tracing::{debug, warn};

/// Build the function table from already-classified lines.
pub fn scan_functions(instructions: &[Option<Instruction>]) -> FunctionTable {
    let mut table = FunctionTable::new();
    let mut idx = 0;

    while idx < instructions.len() {
        if let Some(Instruction::FuncDef(name)) = &instructions[idx] {
            let end = matching_end(instructions, idx);
            let range = BodyRange::new(idx + 1, end);
            if end == instructions.len() {
                warn!(
                    function = name.as_str(),
                    line = idx + 1,
                    "function has no matching `end`; body extends to end of program"
                );
            }
            debug!(function = name.as_str(), start = range.start, end = range.end, "found function");
            table.insert(name.as_str(), range);
            idx = end + 1;
        } else {
            idx += 1;
        }
    }

    table
}

/// Index of the `end` matching the `func` at `def_index`.
///
/// Nested `func` lines deepen the search and every `end` closes one level.
/// Returns `instructions.len()` when the definition is never closed.
pub fn matching_end(instructions: &[Option<Instruction>], def_index: usize) -> usize {
    let mut depth = 1usize;
    for (idx, instruction) in instructions.iter().enumerate().skip(def_index + 1) {
        match instruction {
            Some(Instruction::FuncDef(_)) => depth += 1,
            Some(Instruction::End) => {
                depth -= 1;
                if depth == 0 {
                    return idx;
                }
            }
            _ => {}
        }
    }
    instructions.len()
}
