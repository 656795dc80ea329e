//! Function name to body line range.

use rustc_hash::FxHashMap;
use std::ops::Range;

/// Line range of a function body within the top-level program.
///
/// `start` is the line after `func <name>`; `end` is the index of the
/// matching `end` line (or the program length for an unterminated body).
/// Both are 0-based indices into the original line sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyRange {
    pub start: usize,
    pub end: usize,
}

impl BodyRange {
    pub fn new(start: usize, end: usize) -> Self {
        BodyRange { start, end }
    }

    /// The body as a half-open index range.
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Read-only table of function bodies, built once per program.
///
/// Shared by reference with every nested invocation; never rebuilt per call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionTable {
    functions: FxHashMap<String, BodyRange>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a function body. A later definition with the same name wins.
    pub fn insert(&mut self, name: impl Into<String>, range: BodyRange) {
        self.functions.insert(name.into(), range);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<BodyRange> {
        self.functions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
