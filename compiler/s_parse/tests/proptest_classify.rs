//! Property-based tests for the line classifier and function table.
//!
//! Configuration is tuned to keep case counts modest.

use proptest::prelude::*;
use s_ir::{BodyRange, Instruction};
use s_parse::{classify, Program};

// Strategies

/// Identifiers that are not line keywords.
fn arb_ident() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,10}"
        .prop_filter("line keywords change the grammar", |s| {
            !matches!(s.as_str(), "write" | "writeinput")
        })
}

/// Literal text with no comment marker, quotes, or parentheses.
fn arb_literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .,!?]{0,20}".prop_map(|s| s.trim_end().to_string())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn classify_never_panics(line in "\\PC{0,60}") {
        let _ = classify(&line);
    }

    #[test]
    fn comment_only_lines_classify_to_nothing(ws in "[ \t]{0,5}", comment in "\\PC{0,30}") {
        let line = format!("{ws}${comment}");
        prop_assert_eq!(classify(&line), None);
    }

    #[test]
    fn name_then_literal_is_literal_assignment(name in arb_ident(), value in arb_literal()) {
        let line = format!("{name} {value}");
        prop_assert_eq!(
            classify(&line),
            Some(Instruction::AssignLiteral { name, value })
        );
    }

    #[test]
    fn write_of_bare_identifier_is_write_var(name in arb_ident(), pad in "[ ]{0,3}") {
        let line = format!("write ({pad}{name}{pad})");
        prop_assert_eq!(classify(&line), Some(Instruction::WriteVar(name)));
    }

    #[test]
    fn call_round_trips_name(name in arb_ident()) {
        let line = format!("<{name}>");
        prop_assert_eq!(classify(&line), Some(Instruction::CallFunc(name)));
    }

    #[test]
    fn sequential_functions_get_contiguous_ranges(
        bodies in prop::collection::vec(0usize..4, 1..5)
    ) {
        let mut lines = Vec::new();
        let mut expected = Vec::new();
        for (i, body_len) in bodies.iter().enumerate() {
            let name = format!("f{i}");
            lines.push(format!("func <{name}>"));
            let start = lines.len();
            for j in 0..*body_len {
                lines.push(format!("write line {j}"));
            }
            expected.push((name, BodyRange::new(start, lines.len())));
            lines.push("end".to_string());
        }

        let program = Program::parse(&lines);
        let table = program.functions();
        prop_assert_eq!(table.len(), expected.len());
        for (name, range) in expected {
            prop_assert_eq!(table.get(&name), Some(range));
        }
    }
}
