//! Language reference text.

use s_eval::SharedPrintHandler;

const LANGUAGE_HELP: &str = r#"S Language Commands:
  func <function_name>         Function definition. Ends with end. Call with <function_name> on a line.
  <function_name>              Calls a function previously defined.
  write <text>                 Prints literal text. (variable_name) inside text is replaced.
  write (variable_name)        Prints the value of a variable.
  write ((input))              Prints last input value.
  write (<expression>)         Prints result of arithmetic or string expr.
                               Operators: +, -, *, /, ++ (concatenation)
  writeinput <prompt>          Prompts for user input.
  variable_name <value>        Assigns a literal value.
  variable_name ((input))      Assigns last input to variable.
  variable_name (<expr>)       Assigns expr result to variable.
  img "image_url"              Prints image URL (CLI only).
  if var = "value" then ... end   Conditional block, executes code inside if var matches value.
  $                            Comments after $ are ignored."#;

pub fn language_help() -> &'static str {
    LANGUAGE_HELP
}

pub fn print_language_help(print: &SharedPrintHandler) {
    for line in LANGUAGE_HELP.lines() {
        print.println(line);
    }
}
