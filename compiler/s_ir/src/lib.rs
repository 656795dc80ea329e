//! S IR - shared data model for the S interpreter.
//!
//! This crate contains the types every other stage agrees on:
//! - `Instruction`: the typed meaning of one source line
//! - `Value` / `Number`: runtime values stored in variables
//! - `FunctionTable` / `BodyRange`: function name to body line range
//! - `is_identifier`: the identifier grammar shared by classifier and evaluator
//!
//! # Design Philosophy
//!
//! - **One line, one instruction**: there is no AST below `Instruction`.
//! - **Positions, not copies**: function bodies are line ranges into the
//!   original program, so every line keeps its original number.

mod function_table;
mod ident;
mod instruction;
mod value;

pub use function_table::{BodyRange, FunctionTable};
pub use ident::{is_identifier, is_identifier_continue, is_identifier_start};
pub use instruction::Instruction;
pub use value::{Number, Value};
