//! Call frame tracking and native stack guarding.
//!
//! `CallStack` bounds how deep `<name>` calls may nest. Each call clones
//! the caller's stack and pushes one frame on the clone, so a child never
//! mutates its parent's view.
//!
//! `ensure_sufficient_stack` grows the native stack on demand so that
//! deep S recursion and deeply parenthesized expressions hit the depth
//! limit (or finish) instead of overflowing the thread stack.

use tracing::trace;

use crate::errors::{recursion_limit_exceeded, EvalError};

/// Depth limit used when the embedder does not choose one.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// One active function call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Called function name.
    pub name: String,
    /// 1-based line of the `<name>` instruction.
    pub call_line: usize,
}

/// Live call stack for one interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing without pushing if the limit is reached.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        trace!(
            name = %frame.name,
            line = frame.call_line,
            depth = self.frames.len() + 1,
            "push frame"
        );
        self.frames.push(frame);
        Ok(())
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// Run `f`, growing the native stack first if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining stack below which a new segment is allocated.
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each new segment.
    const GROW_BY: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, GROW_BY, f)
}

/// wasm32 manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
