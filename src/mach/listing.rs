use super::{Program, Var};
use crate::lang::LineNumber;

/// ## Memory dump
///
/// A snapshot of every stored statement and every variable binding,
/// taken without building the line index or moving the program counter.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    lines: Vec<(LineNumber, String)>,
    vars: Vec<(String, String)>,
}

impl Listing {
    pub fn new(program: &Program, vars: &Var) -> Listing {
        Listing {
            lines: program
                .lines()
                .into_iter()
                .map(|(number, statement)| (number, statement.to_string()))
                .collect(),
            vars: vars
                .sorted()
                .into_iter()
                .map(|(name, val)| (name.to_string(), val.literal()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A single statement as it would be listed, if present.
    pub fn line(&self, number: LineNumber) -> Option<String> {
        self.lines
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(n, s)| format!("{} {}", n, s))
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Instructions:")?;
        let width = self
            .lines
            .iter()
            .map(|(n, _)| n.to_string().len())
            .max()
            .unwrap_or(0);
        for (number, statement) in &self.lines {
            writeln!(f, "{:<width$} {}", number, statement, width = width)?;
        }
        writeln!(f, "Variables:")?;
        let width = self
            .vars
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);
        for (name, val) in &self.vars {
            writeln!(f, "{:>width$} : {}", name, val, width = width)?;
        }
        writeln!(f, "done")
    }
}
