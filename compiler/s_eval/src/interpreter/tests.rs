use super::*;
use crate::call_stack::DEFAULT_MAX_CALL_DEPTH;
use crate::input_handler::{scripted_handler, unavailable_handler};
use crate::print_handler::buffer_handler;
use pretty_assertions::assert_eq;

struct Run {
    output: Vec<String>,
    prompts: Vec<String>,
    result: Result<(), FatalError>,
}

fn run_configured(source: &str, answers: &[&str], max_depth: Option<usize>) -> Run {
    let program = Program::from_source(source);
    let print = buffer_handler();
    let input = scripted_handler(answers.iter().copied());
    let result = InterpreterBuilder::new(&program)
        .print_handler(print.clone())
        .input_handler(input.clone())
        .max_call_depth(max_depth)
        .build()
        .run();
    Run {
        output: print.lines(),
        prompts: input.prompts(),
        result,
    }
}

fn run_with_input(source: &str, answers: &[&str]) -> Vec<String> {
    let run = run_configured(source, answers, Some(DEFAULT_MAX_CALL_DEPTH));
    assert!(run.result.is_ok(), "unexpected fatal error");
    run.output
}

fn run(source: &str) -> Vec<String> {
    run_with_input(source, &[])
}

mod variables {
    use super::*;
    use super::assert_eq;

    #[test]
    fn literal_assignment_then_write() {
        assert_eq!(run("greeting hello world\nwrite (greeting)"), vec!["hello world"]);
    }

    #[test]
    fn literal_keeps_quotes_and_parentheses_inside() {
        assert_eq!(
            run("x \"quoted\" (not an expr)\nwrite (x)"),
            vec!["\"quoted\" (not an expr)"]
        );
    }

    #[test]
    fn expression_assignment_stores_number() {
        assert_eq!(run("x (2 + 3)\ny ((x) * 2)\nwrite (y)"), vec!["10"]);
    }

    #[test]
    fn failed_assignment_leaves_variable_unchanged() {
        assert_eq!(
            run("x 5\nx ((x) / 0)\nwrite (x)"),
            vec![
                "Error assigning to 'x': Could not evaluate expression: division by zero (Line 2)",
                "5",
            ]
        );
    }

    #[test]
    fn assignment_from_undefined_variable() {
        assert_eq!(
            run("x ((ghost) + 1)"),
            vec!["Error assigning to 'x': Undefined variable 'ghost' (Line 1)"]
        );
    }

    #[test]
    fn comments_are_stripped() {
        assert_eq!(run("$ header\nx 1 $ trailing\n\nwrite (x)"), vec!["1"]);
    }
}

mod output {
    use super::*;
    use super::assert_eq;

    #[test]
    fn arithmetic() {
        assert_eq!(
            run("write (2 + 3)\nwrite (7 / 2)\nwrite (1.5 + 1.5)\nwrite (2 * (3 + 4))"),
            vec!["5", "3.5", "3.0", "14"]
        );
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            run("write (10 / 0)\nwrite after"),
            vec![
                "Error: Could not evaluate expression: division by zero (Line 1)",
                "after",
            ]
        );
    }

    #[test]
    fn invalid_characters_are_reported() {
        assert_eq!(
            run("word abc\nwrite ((word) + 1)"),
            vec!["Error: Invalid characters or syntax in arithmetic expression. (Line 2)"]
        );
    }

    #[test]
    fn concatenation() {
        assert_eq!(
            run("a ab\nwrite ((a) ++ \"cd\")\nwrite (\"ab\" ++ \"cd\")"),
            vec!["ab\"cd\"", "\"ab\"\"cd\""]
        );
    }

    #[test]
    fn literal_write_substitutes_and_marks_missing() {
        assert_eq!(
            run("name Ada\nwrite Hello (name) and (ghost)!"),
            vec!["Hello Ada and (Error: Var 'ghost' not found)!"]
        );
    }

    #[test]
    fn literal_write_does_not_evaluate() {
        assert_eq!(
            run("write 1 + 1 ++ ((input))"),
            vec!["1 + 1 ++ ((Error: Var 'input' not found))"]
        );
    }

    #[test]
    fn image_placeholder() {
        assert_eq!(
            run("img \"https://example.com/cat.png\""),
            vec!["[Image: https://example.com/cat.png]"]
        );
    }

    #[test]
    fn undefined_variable_does_not_halt() {
        assert_eq!(
            run("write (nope)\nwrite after"),
            vec!["Error: Variable 'nope' not found (Line 1)", "after"]
        );
    }

    #[test]
    fn invalid_syntax_is_reported_with_line_text() {
        assert_eq!(
            run("write ok\n!!! what $ comment"),
            vec![
                "ok",
                "Error on line 2: Invalid syntax or unrecognized command: \"!!! what\"",
            ]
        );
    }

    #[test]
    fn line_numbers_count_blank_lines() {
        assert_eq!(
            run("\n\n$ note\nwrite (missing)"),
            vec!["Error: Variable 'missing' not found (Line 4)"]
        );
    }
}

mod input {
    use super::*;
    use super::assert_eq;

    #[test]
    fn write_input_before_any_read_is_empty() {
        assert_eq!(run("write ((input))"), vec![""]);
    }

    #[test]
    fn read_then_write_and_assign() {
        let run = run_configured(
            "writeinput What is your name?\nwrite ((input))\nname ((input))\nwrite Hi (name)",
            &["Ada"],
            None,
        );
        assert!(run.result.is_ok());
        assert_eq!(run.output, vec!["Ada", "Hi Ada"]);
        assert_eq!(run.prompts, vec!["What is your name?"]);
    }

    #[test]
    fn input_feeds_expressions() {
        assert_eq!(
            run_with_input("writeinput n?\nwrite (((input)) * 2)", &["21"]),
            vec!["42"]
        );
    }

    #[test]
    fn latest_input_wins() {
        assert_eq!(
            run_with_input("writeinput a\nwriteinput b\nwrite ((input))", &["one", "two"]),
            vec!["two"]
        );
    }

    #[test]
    fn unavailable_input_is_fatal() {
        let program = Program::from_source("write before\nwriteinput Q\nwrite after");
        let print = buffer_handler();
        let result = InterpreterBuilder::new(&program)
            .print_handler(print.clone())
            .input_handler(unavailable_handler())
            .build()
            .run();
        assert!(matches!(result, Err(FatalError::InputUnavailable(_))));
        assert_eq!(print.lines(), vec!["before"]);
    }

    #[test]
    fn fatal_error_escapes_function_calls() {
        let run = run_configured(
            "func <ask>\nwriteinput Q\nwrite unreachable\nend\n<ask>\nwrite after",
            &[],
            None,
        );
        assert!(matches!(run.result, Err(FatalError::InputUnavailable(_))));
        assert!(run.output.is_empty());
    }
}

mod conditionals {
    use super::*;
    use super::assert_eq;

    const GUARD: &str = "if x = \"yes\" then\nwrite hit\nend\nwrite after";

    #[test]
    fn matching_guard_runs_block() {
        assert_eq!(run(&format!("x yes\n{GUARD}")), vec!["hit", "after"]);
    }

    #[test]
    fn failing_guard_skips_block() {
        assert_eq!(run(&format!("x no\n{GUARD}")), vec!["after"]);
    }

    #[test]
    fn undefined_variable_never_matches() {
        assert_eq!(run(GUARD), vec!["after"]);
    }

    #[test]
    fn numbers_never_match_literals() {
        assert_eq!(
            run("x (1 + 1)\nif x = \"2\" then\nwrite yes\nend\nwrite done"),
            vec!["done"]
        );
    }

    #[test]
    fn nested_if_inside_skipped_block_is_not_evaluated() {
        let source = "x no
if x = \"yes\" then
if x = \"no\" then
write inner
end
write outer
end
write after";
        assert_eq!(run(source), vec!["after"]);
    }

    #[test]
    fn nested_true_blocks() {
        let source = "a 1
b 2
if a = \"1\" then
if b = \"2\" then
write both
end
write outer
end";
        assert_eq!(run(source), vec!["both", "outer"]);
    }

    #[test]
    fn errors_inside_skipped_block_are_not_reported() {
        assert_eq!(
            run("if x = \"y\" then\n!!!\n<missing>\nwrite (ghost)\nend"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn stray_end_is_a_no_op() {
        assert_eq!(run("end\nwrite ok"), vec!["ok"]);
    }
}

mod functions {
    use super::*;
    use super::assert_eq;

    #[test]
    fn definitions_do_not_run_inline() {
        assert_eq!(run("func <greet>\nwrite inside\nend\nwrite top"), vec!["top"]);
    }

    #[test]
    fn nested_definition_is_stepped_over_when_body_runs() {
        let source = "func <outer>
func <inner>
write nested
end
write after
end
<outer>";
        assert_eq!(run(source), vec!["after"]);
    }

    #[test]
    fn call_runs_body() {
        assert_eq!(
            run("func <greet>\nwrite hello\nend\n<greet>\n<greet>"),
            vec!["hello", "hello"]
        );
    }

    #[test]
    fn call_before_definition() {
        assert_eq!(run("<greet>\nfunc <greet>\nwrite hello\nend"), vec!["hello"]);
    }

    #[test]
    fn callee_changes_do_not_leak() {
        let source = "y 1
func <f>
y 2
write (y)
end
<f>
write (y)";
        assert_eq!(run(source), vec!["2", "1"]);
    }

    #[test]
    fn callee_sees_caller_state() {
        let source = "func <show>
write (who) said hi
write ((input))
end
who Ada
writeinput Q
<show>";
        assert_eq!(run_with_input(source, &["hi"]), vec!["Ada said hi", "hi"]);
    }

    #[test]
    fn callee_input_does_not_leak() {
        assert_eq!(
            run_with_input("func <ask>\nwriteinput Q\nend\n<ask>\nwrite ((input))", &["inner"]),
            vec![""]
        );
    }

    #[test]
    fn unknown_function_is_reported() {
        assert_eq!(
            run("<missing>\nwrite after"),
            vec!["Error: Function <missing> not found (Line 1)", "after"]
        );
    }

    #[test]
    fn diagnostics_inside_body_use_source_line_numbers() {
        assert_eq!(
            run("write start\nfunc <f>\nwrite (missing)\nend\n<f>"),
            vec!["start", "Error: Variable 'missing' not found (Line 3)"]
        );
    }

    #[test]
    fn functions_can_call_functions() {
        let source = "func <inner>
write inner
end
func <outer>
write outer
<inner>
end
<outer>";
        assert_eq!(run(source), vec!["outer", "inner"]);
    }

    #[test]
    fn last_definition_wins() {
        assert_eq!(
            run("func <f>\nwrite one\nend\nfunc <f>\nwrite two\nend\n<f>"),
            vec!["two"]
        );
    }

    #[test]
    fn function_defined_in_false_block_stays_callable() {
        let source = "x no
if x = \"yes\" then
func <hidden>
write found
end
end
<hidden>";
        assert_eq!(run(source), vec!["found"]);
    }

    #[test]
    fn if_end_inside_body_closes_the_function() {
        let source = "func <f>
if x = \"1\" then
write inside
end
write tail
end
<f>";
        // The `end` on line 4 closes `f`; line 5 runs at top level.
        assert_eq!(run(source), vec!["tail"]);
    }

    #[test]
    fn unterminated_function_extends_to_end_of_program() {
        assert_eq!(run("write top\n<f>\nfunc <f>\nwrite body"), vec!["top", "body"]);
    }
}

mod recursion {
    use super::*;
    use super::assert_eq;

    const FOREVER: &str = "func <f>\n<f>\nend\n<f>\nwrite done";

    #[test]
    fn limit_is_reported_once_and_execution_continues() {
        let run = run_configured(FOREVER, &[], Some(5));
        assert!(run.result.is_ok());
        assert_eq!(
            run.output,
            vec![
                "Error on line 2: maximum call depth exceeded (limit: 5)",
                "done",
            ]
        );
    }

    #[test]
    fn zero_limit_rejects_every_call() {
        let run = run_configured("func <f>\nwrite never\nend\n<f>", &[], Some(0));
        assert_eq!(
            run.output,
            vec!["Error on line 4: maximum call depth exceeded (limit: 0)"]
        );
    }

    #[test]
    fn deep_recursion_does_not_overflow_native_stack() {
        let run = run_configured(FOREVER, &[], Some(2_000));
        assert_eq!(
            run.output,
            vec![
                "Error on line 2: maximum call depth exceeded (limit: 2000)",
                "done",
            ]
        );
    }
}

#[test]
fn builder_seeds_state() {
    let program = Program::from_source("write got (x)\nwrite ((input))");
    let print = buffer_handler();
    let env: Environment = [("x", Value::string("seeded"))].into_iter().collect();
    let mut interpreter = InterpreterBuilder::new(&program)
        .env(env)
        .last_input("earlier")
        .print_handler(print.clone())
        .input_handler(unavailable_handler())
        .build();
    assert!(interpreter.run().is_ok());
    assert_eq!(print.lines(), vec!["got seeded", "earlier"]);
    assert_eq!(interpreter.last_input(), "earlier");
    assert_eq!(interpreter.env().get("x"), Some(&Value::string("seeded")));
}

#[test]
fn execute_runs_only_the_given_range() {
    let program = Program::from_source("write one\nwrite two\nwrite three");
    let print = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(&program)
        .print_handler(print.clone())
        .build();
    assert!(interpreter.execute(1..2).is_ok());
    assert_eq!(print.lines(), vec!["two"]);
}
