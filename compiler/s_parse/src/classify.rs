//! Line classification.
//!
//! Grammars are tried in a fixed priority order and the first match wins.
//! Several forms are prefixes of later ones (`write ((input))` before
//! `write (x)` before `write text`, keyword forms before generic
//! assignment), so the order below is load-bearing.

use s_ir::{is_identifier, is_identifier_continue, is_identifier_start, Instruction};
use tracing::trace;

/// Everything from this character to the end of the line is a comment.
pub const COMMENT_MARKER: char = '$';

/// Remove the comment (if any) and surrounding whitespace from a line.
pub fn strip_comment(raw: &str) -> &str {
    let code = match raw.find(COMMENT_MARKER) {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    code.trim()
}

/// Classify one raw source line.
///
/// Returns `None` for lines that are empty after comment stripping; the
/// caller skips those. Every other line yields exactly one instruction,
/// with `Instruction::Error` as the fallback.
pub fn classify(raw: &str) -> Option<Instruction> {
    let line = strip_comment(raw);
    if line.is_empty() {
        return None;
    }

    let instruction = match_end(line)
        .or_else(|| match_func_def(line))
        .or_else(|| match_call(line))
        .or_else(|| match_if(line))
        .or_else(|| match_write_input(line))
        .or_else(|| match_img(line))
        .or_else(|| match_write(line))
        .or_else(|| match_assignment(line))
        .unwrap_or_else(|| Instruction::Error(line.to_string()));

    trace!(kind = instruction.kind_name(), line, "classified");
    Some(instruction)
}

// Grammar helpers

/// Strip a leading keyword that must be followed by at least one whitespace
/// character. Returns the remainder with that whitespace removed.
fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Match `<name>` spanning the whole of `s`.
fn angle_identifier(s: &str) -> Option<&str> {
    let name = s.strip_prefix('<')?.strip_suffix('>')?;
    is_identifier(name).then_some(name)
}

/// Split a leading identifier off `s`.
fn leading_identifier(s: &str) -> Option<(&str, &str)> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if is_identifier_start(c) => {}
        _ => return None,
    }
    let end = chars
        .find(|&(_, c)| !is_identifier_continue(c))
        .map_or(s.len(), |(i, _)| i);
    Some(s.split_at(end))
}

/// Match `(<inner>)` spanning the whole of `s`, with a non-empty inner part.
fn parenthesized(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('(')?.strip_suffix(')')?;
    (!inner.is_empty()).then_some(inner)
}

// Grammars, highest priority first

fn match_end(line: &str) -> Option<Instruction> {
    line.eq_ignore_ascii_case("end").then_some(Instruction::End)
}

fn match_func_def(line: &str) -> Option<Instruction> {
    let rest = keyword_rest(line, "func")?;
    angle_identifier(rest).map(|name| Instruction::FuncDef(name.to_string()))
}

fn match_call(line: &str) -> Option<Instruction> {
    angle_identifier(line).map(|name| Instruction::CallFunc(name.to_string()))
}

/// `if <name> = "<literal>" then`
fn match_if(line: &str) -> Option<Instruction> {
    let rest = keyword_rest(line, "if")?;
    let (name, rest) = leading_identifier(rest)?;
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let rest = rest.strip_prefix('"')?;
    let close = rest.find('"')?;
    let literal = &rest[..close];
    if rest[close + 1..].trim_start() != "then" {
        return None;
    }
    Some(Instruction::If {
        name: name.to_string(),
        literal: literal.to_string(),
    })
}

fn match_write_input(line: &str) -> Option<Instruction> {
    keyword_rest(line, "writeinput").map(|prompt| Instruction::WriteInput(prompt.to_string()))
}

/// `img "<url>"`, where the url is non-empty and quote-free.
fn match_img(line: &str) -> Option<Instruction> {
    let rest = keyword_rest(line, "img")?;
    let url = rest.strip_prefix('"')?.strip_suffix('"')?;
    if url.is_empty() || url.contains('"') {
        return None;
    }
    Some(Instruction::Img(url.to_string()))
}

/// The three `write` forms, in priority order.
fn match_write(line: &str) -> Option<Instruction> {
    let rest = keyword_rest(line, "write")?;
    if rest == "((input))" {
        return Some(Instruction::WriteSystemInput);
    }
    if let Some(inner) = parenthesized(rest) {
        let content = inner.trim();
        return Some(if is_identifier(content) {
            Instruction::WriteVar(content.to_string())
        } else {
            Instruction::WriteExpr(content.to_string())
        });
    }
    Some(Instruction::WriteLiteral(rest.to_string()))
}

/// `<name> <rest>`: generic assignment.
fn match_assignment(line: &str) -> Option<Instruction> {
    let (name, rest) = leading_identifier(line)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let value = rest.trim();
    let name = name.to_string();

    if value == "((input))" {
        return Some(Instruction::AssignFromInput(name));
    }
    if let Some(inner) = parenthesized(value) {
        return Some(Instruction::AssignFromExpr {
            name,
            expr: inner.trim().to_string(),
        });
    }
    Some(Instruction::AssignLiteral {
        name,
        value: value.to_string(),
    })
}
