//! Classified source lines.

/// The typed meaning of a single source line.
///
/// Produced by the line classifier, matched exhaustively by the interpreter.
/// Each variant carries only the substrings matched from its line; nothing
/// here has been evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `func <name>`: start of a function definition.
    FuncDef(String),
    /// `<name>`: call a previously defined function.
    CallFunc(String),
    /// `if name = "literal" then`: open a conditional block.
    If { name: String, literal: String },
    /// `end`: close a function definition or conditional block.
    End,
    /// `writeinput <prompt>`: read one line of interactive input.
    WriteInput(String),
    /// `img "<url>"`: print an image placeholder.
    Img(String),
    /// `write ((input))`: print the last input.
    WriteSystemInput,
    /// `write (name)`: print a variable.
    WriteVar(String),
    /// `write (<expr>)`: print the result of an expression.
    WriteExpr(String),
    /// `write <text>`: print text with `(name)` substitution.
    WriteLiteral(String),
    /// `name ((input))`: store the last input.
    AssignFromInput(String),
    /// `name (<expr>)`: store the result of an expression.
    AssignFromExpr { name: String, expr: String },
    /// `name <value>`: store a literal string.
    AssignLiteral { name: String, value: String },
    /// Any line matching none of the forms above.
    Error(String),
}

impl Instruction {
    /// Short name of the instruction kind, used in trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Instruction::FuncDef(_) => "func_def",
            Instruction::CallFunc(_) => "call_func",
            Instruction::If { .. } => "if",
            Instruction::End => "end",
            Instruction::WriteInput(_) => "writeinput",
            Instruction::Img(_) => "img",
            Instruction::WriteSystemInput => "write_system_input",
            Instruction::WriteVar(_) => "write_var",
            Instruction::WriteExpr(_) => "write_expr",
            Instruction::WriteLiteral(_) => "write_literal",
            Instruction::AssignFromInput(_) => "assign_input",
            Instruction::AssignFromExpr { .. } => "assign_expr",
            Instruction::AssignLiteral { .. } => "assign_literal",
            Instruction::Error(_) => "error",
        }
    }
}
