//! `(name)` substitution.
//!
//! Both `write <text>` and expression evaluation replace parenthesized
//! identifiers. They differ only in what happens when a name is unknown, so
//! the scanner takes a resolver and leaves that policy to the caller.

use s_ir::{is_identifier_continue, is_identifier_start};

use crate::environment::Environment;

/// Replace every `(identifier)` in `text` using `resolve`.
///
/// Scans left to right; replaced text is never rescanned. A `(` that does
/// not start an `(identifier)` is copied through unchanged. The first
/// resolver error aborts the substitution.
pub fn substitute_identifiers<E>(
    text: &str,
    mut resolve: impl FnMut(&str) -> Result<String, E>,
) -> Result<String, E> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match parenthesized_identifier(after_open) {
            Some(name) => {
                out.push_str(&resolve(name)?);
                rest = &after_open[name.len() + 1..];
            }
            None => {
                out.push('(');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// If `s` starts with `identifier)`, return the identifier.
fn parenthesized_identifier(s: &str) -> Option<&str> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if is_identifier_start(c) => {}
        _ => return None,
    }
    let (end, close) = chars.find(|&(_, c)| !is_identifier_continue(c))?;
    (close == ')').then(|| &s[..end])
}

/// Substitution for `write <text>`: unknown names become an inline
/// `(Error: Var '<name>' not found)` placeholder instead of failing.
pub fn substitute_literal(text: &str, env: &Environment) -> String {
    let result: Result<String, std::convert::Infallible> = substitute_identifiers(text, |name| {
        Ok(match env.get(name) {
            Some(value) => value.to_string(),
            None => format!("(Error: Var '{name}' not found)"),
        })
    });
    match result {
        Ok(text) => text,
        Err(never) => match never {},
    }
}
