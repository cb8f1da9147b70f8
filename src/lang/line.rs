use super::ast::Statement;
use super::error::*;
use super::parse::*;
use super::LineNumber;

/// One numbered statement of a program.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    statement: Statement,
}

impl Line {
    pub fn new(number: LineNumber, statement: Statement) -> Line {
        Line { number, statement }
    }

    /// Parses one source line. An empty line, or one that parses to
    /// nothing executable, is `Ok(None)`.
    pub fn from_str(s: &str) -> Result<Option<Line>, Error> {
        parse(s)
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn into_parts(self) -> (LineNumber, Statement) {
        (self.number, self.statement)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.statement)
    }
}
