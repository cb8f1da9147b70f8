use super::LineNumber;
use std::rc::Rc;

/// The closed instruction set. Statements are immutable once parsed.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    /// Operands are emitted in order with no separator.
    /// The flag suppresses the trailing line break.
    Print(Vec<Expression>, bool),
    Let(Rc<str>, Expression),
    Goto(LineNumber),
}

/// Anything that can stand where a value is expected.
/// `Var` is a deferred lookup resolved when the statement executes.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(i32),
    String(Rc<str>),
    Var(Rc<str>),
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
            Var(name) => write!(f, "{}", name),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Print(operands, no_newline) => {
                write!(f, "PRINT")?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, ";")?;
                    } else if !matches!(operand, Expression::String(_)) {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", operand)?;
                }
                if *no_newline {
                    write!(f, ";")?;
                }
                Ok(())
            }
            Let(name, value) => write!(f, "LET {}={}", name, value),
            Goto(line_number) => write!(f, "GOTO {}", line_number),
        }
    }
}
