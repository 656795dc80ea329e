//! Expression evaluation.
//!
//! An expression is the parenthesized text after `write` or an assignment.
//! Evaluation runs in a fixed order:
//!
//! 1. trim surrounding whitespace
//! 2. replace every `((input))` with the last input
//! 3. replace every `(name)` with the variable's value (undefined fails)
//! 4. if the text contains `++`: split, trim each part, concatenate (string result)
//! 5. otherwise require `[0-9+\-*/().\s]+` and evaluate it as arithmetic
//!
//! Concatenation and arithmetic never mix within one expression.

mod arith;
mod substitute;

use s_ir::Value;

use crate::environment::Environment;
use crate::errors::{invalid_characters, undefined_variable, EvalResult};

pub use arith::{evaluate_arithmetic, BinaryOp};
pub use substitute::{substitute_identifiers, substitute_literal};

/// Token that stands for the last interactive input.
pub const INPUT_TOKEN: &str = "((input))";

/// Token that switches an expression into concatenation mode.
pub const CONCAT_TOKEN: &str = "++";

/// Evaluate an expression against the current variables and last input.
pub fn evaluate(expr: &str, env: &Environment, last_input: &str) -> EvalResult<Value> {
    let expr = expr.trim().replace(INPUT_TOKEN, last_input);

    let processed = substitute_identifiers(&expr, |name| {
        env.get(name)
            .map(ToString::to_string)
            .ok_or_else(|| undefined_variable(name))
    })?;

    if processed.contains(CONCAT_TOKEN) {
        let joined: String = processed.split(CONCAT_TOKEN).map(str::trim).collect();
        return Ok(Value::Str(joined));
    }

    if !is_arithmetic_text(&processed) {
        return Err(invalid_characters());
    }

    evaluate_arithmetic(&processed).map(Value::Number)
}

/// Whether `text` is non-empty and uses only digits, operators, parentheses,
/// dots, and whitespace.
fn is_arithmetic_text(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || "+-*/().".contains(c) || c.is_whitespace())
}
