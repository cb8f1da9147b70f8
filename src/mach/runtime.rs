use super::{Listing, Program, Val, Var};
use crate::error;
use crate::lang::{
    ast::{Expression, Statement},
    Error, Line, LineNumber,
};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Instructions per slice when running to completion.
const RUN_CYCLES: usize = 5000;

/// ## Execution engine
///
/// Owns the program, the variables, and the program counter. The
/// program counter indexes the sorted line index, not line numbers.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    vars: Var,
    pc: usize,
    current_line: Option<LineNumber>,
    running: bool,
    steps: u64,
    printed: String,
    pending: Option<Error>,
}

/// ## Events for the user interface
///
/// Returned by [`Runtime::execute`].

#[derive(Debug, PartialEq)]
pub enum Event {
    /// Output of one `PRINT`.
    Print(String),
    /// The slice ran out; call `execute` again.
    Running,
    /// Nothing left to execute.
    Stopped,
    /// The run was aborted.
    Error(Error),
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Instructions executed since this runtime was created.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The program counter is past the last indexed line.
    pub fn at_end(&self) -> bool {
        self.pc >= self.program.index().len()
    }

    /// Parses one source line into the program.
    pub fn enter(&mut self, s: &str) -> Result<()> {
        if let Some(line) = Line::from_str(s)? {
            self.program.insert(line);
        }
        Ok(())
    }

    /// Enters every line of `reader`. Returns how many lines were read.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut count = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Err(error!(InternalError; e.to_string())),
            };
            count += 1;
            if line.is_empty() {
                continue;
            }
            if let Err(e) = self.enter(&line) {
                return Err(e.message(format!("IN FILE LINE {}", index + 1)));
            }
        }
        Ok(count)
    }

    /// Builds the line index once. Building resets the program counter;
    /// later calls change nothing.
    pub fn build_index(&mut self) -> Result<()> {
        if self.program.build_index()? {
            self.pc = 0;
        }
        Ok(())
    }

    /// Jump resolution: point the program counter at `line_number`.
    pub fn set_pc(&mut self, line_number: LineNumber) -> Result<()> {
        self.build_index()?;
        match self.program.find(line_number) {
            Some(pc) => {
                self.pc = pc;
                Ok(())
            }
            None => Err(error!(UndefinedLine; format!("LINE {} NOT FOUND", line_number))),
        }
    }

    pub fn listing(&self) -> Listing {
        Listing::new(&self.program, &self.vars)
    }

    /// Arms the runtime for `execute`. Does not rewind the program counter.
    pub fn start(&mut self) -> Result<()> {
        self.build_index()?;
        self.pending = None;
        self.running = true;
        Ok(())
    }

    /// Stops a live run. The next `execute` reports the break.
    pub fn interrupt(&mut self) {
        if self.running && self.pending.is_none() {
            let line_number = self.current_line;
            debug!(?line_number, "interrupted");
            self.pending = Some(error!(Break).in_line_number(line_number));
        }
    }

    /// Runs until the program halts or fails, writing output to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.start()?;
        loop {
            let event = self.execute(RUN_CYCLES);
            let result = match event {
                Event::Print(s) => out.write_all(s.as_bytes()),
                Event::Running => continue,
                Event::Stopped => return flush(out),
                Event::Error(error) => {
                    flush(out)?;
                    return Err(error);
                }
            };
            if let Err(e) = result {
                self.running = false;
                return Err(error!(InternalError; e.to_string()));
            }
        }
    }

    /// Executes at most `cycles` instructions. Returns early with the
    /// output of any `PRINT`. A `PRINT` that fails part way reports its
    /// partial output first and the error on the following call.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(error) = self.pending.take() {
            self.running = false;
            return Event::Error(error);
        }
        if !self.running {
            return Event::Stopped;
        }
        for _ in 0..cycles {
            let line_number = match self.program.index().get(self.pc) {
                Some(&line_number) => line_number,
                None => {
                    debug!(steps = self.steps, "program halted");
                    self.running = false;
                    return Event::Stopped;
                }
            };
            trace!(line_number, pc = self.pc, "execute");
            self.pc += 1;
            self.steps += 1;
            self.current_line = Some(line_number);
            let result = self.execute_line(line_number);
            let printed = std::mem::take(&mut self.printed);
            match result {
                Ok(()) => {
                    if !printed.is_empty() {
                        return Event::Print(printed);
                    }
                }
                Err(error) => {
                    let error = error.in_line_number(line_number);
                    self.running = false;
                    if printed.is_empty() {
                        return Event::Error(error);
                    }
                    self.pending = Some(error);
                    return Event::Print(printed);
                }
            }
        }
        Event::Running
    }

    fn execute_line(&mut self, line_number: LineNumber) -> Result<()> {
        let statement = match self.program.get(line_number) {
            Some(statement) => statement,
            None => return Err(error!(InternalError; "LINE MISSING FROM PROGRAM")),
        };
        match statement {
            Statement::Print(operands, no_newline) => {
                for operand in operands {
                    let val = eval(&self.vars, operand)?;
                    self.printed.push_str(&val.to_string());
                }
                if !no_newline {
                    self.printed.push('\n');
                }
                Ok(())
            }
            Statement::Let(var_name, value) => {
                let val = eval(&self.vars, value)?;
                self.vars.store(var_name, val);
                Ok(())
            }
            Statement::Goto(target) => {
                let target = *target;
                self.set_pc(target)
            }
        }
    }
}

fn eval(vars: &Var, expr: &Expression) -> Result<Val> {
    match expr {
        Expression::Integer(n) => Ok(Val::Integer(*n)),
        Expression::String(s) => Ok(Val::String(s.clone())),
        Expression::Var(var_name) => vars.fetch(var_name),
    }
}

fn flush<W: Write>(out: &mut W) -> Result<()> {
    match out.flush() {
        Ok(()) => Ok(()),
        Err(e) => Err(error!(InternalError; e.to_string())),
    }
}
