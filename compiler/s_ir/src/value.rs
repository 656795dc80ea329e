//! Runtime values for the S interpreter.
//!
//! The language is narrowly typed: literal assignment always stores a
//! string, expression assignment stores whatever the evaluator produced
//! (a number for arithmetic, a string for `++` concatenation).

use std::fmt;

/// Numeric result of an arithmetic expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Integer value (literals without a decimal point, exact divisions).
    Int(i64),
    /// Floating-point value.
    Float(f64),
}

impl Number {
    /// The value as a float, for mixed-mode arithmetic.
    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "int to float promotion mirrors mixed-mode arithmetic"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// Whether this number is zero (integer or float).
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => write_float(f, *x),
        }
    }
}

/// Write a float in shortest round-trip form.
///
/// Integral floats keep a trailing `.0`. Magnitudes below `1e-4` or at
/// least `1e16` switch to scientific notation with a signed exponent of at
/// least two digits (`1e+16`, `2.5e-05`).
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if !x.is_finite() {
        return write!(f, "{x}");
    }
    if x == 0.0 {
        return write!(f, "{}", if x.is_sign_negative() { "-0.0" } else { "0.0" });
    }

    let sci = format!("{x:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let plain = x.to_string();
        if plain.contains('.') {
            write!(f, "{plain}")
        } else {
            write!(f, "{plain}.0")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.abs())
    }
}

/// A value stored in a variable or produced by the evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// String value (literals, last input, concatenation results).
    Str(String),
    /// Numeric value (arithmetic results).
    Number(Number),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Number(Number::Int(n))
    }

    /// Create a float value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }

    /// Whether this value equals a conditional literal.
    ///
    /// Only string values can match: `if` guards compare the stored string
    /// exactly, so a number never equals a literal even if it prints the same.
    pub fn matches_literal(&self, literal: &str) -> bool {
        matches!(self, Value::Str(s) if s == literal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}
