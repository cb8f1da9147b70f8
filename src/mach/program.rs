use crate::error;
use crate::lang::{ast::Statement, Error, Line, LineNumber};
use std::collections::HashMap;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Statements are kept sparse, keyed by line number, in whatever order
/// they were entered. Execution walks a dense index of the sorted line
/// numbers which is built once, on first demand. Inserting a line drops
/// the index so the next build sees the new line.

#[derive(Debug, Default)]
pub struct Program {
    lines: HashMap<LineNumber, Statement>,
    index: Option<Vec<LineNumber>>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Last write wins. Returns the statement that was replaced.
    pub fn insert(&mut self, line: Line) -> Option<Statement> {
        let (number, statement) = line.into_parts();
        self.index = None;
        let previous = self.lines.insert(number, statement);
        if previous.is_some() {
            warn!(line_number = number, "line redefined, keeping the last definition");
        }
        previous
    }

    pub fn get(&self, line_number: LineNumber) -> Option<&Statement> {
        self.lines.get(&line_number)
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Sorted line numbers. Empty until the index is built.
    pub fn index(&self) -> &[LineNumber] {
        match &self.index {
            Some(index) => index.as_slice(),
            None => &[],
        }
    }

    /// Returns `true` only when this call did the building.
    pub fn build_index(&mut self) -> Result<bool> {
        if self.index.is_some() {
            return Ok(false);
        }
        let mut index: Vec<LineNumber> = self.lines.keys().copied().collect();
        index.sort_unstable();
        // Keys of a map are unique; this holds as long as that does.
        for pair in index.windows(2) {
            if pair[0] == pair[1] {
                return Err(error!(DuplicateLineNumber, pair[1]));
            }
        }
        debug!(lines = index.len(), "line index built");
        self.index = Some(index);
        Ok(true)
    }

    /// Position of `line_number` in the index, exact matches only.
    pub fn find(&self, line_number: LineNumber) -> Option<usize> {
        self.index().binary_search(&line_number).ok()
    }

    /// Every statement in line order. Does not need or touch the index.
    pub fn lines(&self) -> Vec<(LineNumber, &Statement)> {
        let mut lines: Vec<(LineNumber, &Statement)> =
            self.lines.iter().map(|(n, s)| (*n, s)).collect();
        lines.sort_unstable_by_key(|(n, _)| *n);
        lines
    }
}
