//! Restricted arithmetic: `+ - * /`, unary signs, parentheses.
//!
//! Tokens come from a `logos` lexer; a small precedence-climbing parser
//! evaluates as it parses (there is nothing to reuse an AST for).
//!
//! Integer arithmetic is checked. `Int / Int` stays an integer only when the
//! division is exact; otherwise, and whenever a float is involved, the result
//! is a float. Division by zero is an error, never an infinity.

use logos::Logos;
use s_ir::Number;

use crate::call_stack::ensure_sufficient_stack;
use crate::errors::{
    division_by_zero, integer_overflow, malformed_expression, not_a_number, EvalResult,
};

/// Arithmetic token.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
enum Token {
    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+")]
    Float,
    #[regex(r"[0-9]+")]
    Int,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Operation name used in overflow messages.
    fn operation_name(self) -> &'static str {
        match self {
            BinaryOp::Add => "addition",
            BinaryOp::Sub => "subtraction",
            BinaryOp::Mul => "multiplication",
            BinaryOp::Div => "division",
        }
    }

    /// Apply the operator to two numbers.
    pub fn apply(self, lhs: Number, rhs: Number) -> EvalResult<Number> {
        if self == BinaryOp::Div && rhs.is_zero() {
            return Err(division_by_zero());
        }
        match (lhs, rhs) {
            (Number::Int(a), Number::Int(b)) => self.apply_int(a, b),
            _ => Ok(Number::Float(self.apply_float(lhs.as_f64(), rhs.as_f64()))),
        }
    }

    fn apply_int(self, a: i64, b: i64) -> EvalResult<Number> {
        let result = match self {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Sub => a.checked_sub(b),
            BinaryOp::Mul => a.checked_mul(b),
            BinaryOp::Div => {
                if a.checked_rem(b) != Some(0) {
                    let quotient = Number::Int(a).as_f64() / Number::Int(b).as_f64();
                    return Ok(Number::Float(quotient));
                }
                a.checked_div(b)
            }
        };
        result
            .map(Number::Int)
            .ok_or_else(|| integer_overflow(self.operation_name()))
    }

    fn apply_float(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }
}

/// Evaluate arithmetic text that has already passed the character check.
pub fn evaluate_arithmetic(src: &str) -> EvalResult<Number> {
    let tokens = tokenize(src)?;
    let mut parser = ArithParser { tokens, pos: 0 };
    let value = parser.expression()?;
    match parser.bump() {
        None => Ok(value),
        Some((_, text)) => Err(malformed_expression(format!("unexpected '{text}'"))),
    }
}

fn tokenize(src: &str) -> EvalResult<Vec<(Token, &str)>> {
    Token::lexer(src)
        .spanned()
        .map(|(token, span)| {
            let text = &src[span];
            token
                .map(|token| (token, text))
                .map_err(|()| malformed_expression(format!("invalid syntax near '{text}'")))
        })
        .collect()
}

struct ArithParser<'src> {
    tokens: Vec<(Token, &'src str)>,
    pos: usize,
}

impl<'src> ArithParser<'src> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|&(token, _)| token)
    }

    fn bump(&mut self) -> Option<(Token, &'src str)> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.peek()? {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.peek()? {
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// `term (('+' | '-') term)*`
    fn expression(&mut self) -> EvalResult<Number> {
        let mut lhs = self.term()?;
        while let Some(op) = self.match_additive_op() {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = op.apply(lhs, rhs)?;
        }
        Ok(lhs)
    }

    /// `unary (('*' | '/') unary)*`
    fn term(&mut self) -> EvalResult<Number> {
        let mut lhs = self.unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = op.apply(lhs, rhs)?;
        }
        Ok(lhs)
    }

    /// `('+' | '-') unary | primary`
    fn unary(&mut self) -> EvalResult<Number> {
        ensure_sufficient_stack(|| match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            Some(Token::Minus) => {
                self.pos += 1;
                match self.unary()? {
                    Number::Int(n) => n
                        .checked_neg()
                        .map(Number::Int)
                        .ok_or_else(|| integer_overflow("negation")),
                    Number::Float(f) => Ok(Number::Float(-f)),
                }
            }
            _ => self.primary(),
        })
    }

    /// Number literal or parenthesized expression.
    fn primary(&mut self) -> EvalResult<Number> {
        match self.bump() {
            Some((Token::Int, text)) => parse_int(text),
            Some((Token::Float, text)) => text
                .parse::<f64>()
                .map(Number::Float)
                .map_err(|_| malformed_expression(format!("invalid number '{text}'"))),
            Some((Token::LParen, _)) => {
                if self.peek() == Some(Token::RParen) {
                    // `()` is an empty group, not a number.
                    return Err(not_a_number());
                }
                let value = self.expression()?;
                match self.bump() {
                    Some((Token::RParen, _)) => Ok(value),
                    Some((_, text)) => Err(malformed_expression(format!(
                        "expected ')', found '{text}'"
                    ))),
                    None => Err(malformed_expression("'(' was never closed")),
                }
            }
            Some((_, text)) => Err(malformed_expression(format!("unexpected '{text}'"))),
            None => Err(malformed_expression("unexpected end of expression")),
        }
    }
}

/// Parse a decimal integer literal. Leading zeros are only allowed when
/// every digit is zero (`007` is rejected, `000` is fine).
fn parse_int(text: &str) -> EvalResult<Number> {
    if text.len() > 1 && text.starts_with('0') && text.bytes().any(|b| b != b'0') {
        return Err(malformed_expression(
            "leading zeros in decimal integer literals are not permitted",
        ));
    }
    text.parse::<i64>()
        .map(Number::Int)
        .map_err(|_| integer_overflow("integer literal"))
}
