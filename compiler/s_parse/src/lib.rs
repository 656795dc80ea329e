//! S Parse - turns source lines into instructions.
//!
//! There is no token stream or syntax tree: every physical line classifies
//! to at most one `Instruction`, and a pre-pass over the classified lines
//! locates function bodies.
//!
//! # Pipeline
//!
//! ```text
//! lines ──classify──▶ Option<Instruction> per line ──scan_functions──▶ FunctionTable
//! ```
//!
//! `Program` bundles the three (source, instructions, table) so the
//! interpreter classifies each line exactly once.

mod classify;
mod function_table;
mod program;

pub use classify::{classify, strip_comment, COMMENT_MARKER};
pub use function_table::{matching_end, scan_functions};
pub use program::Program;
