//! # GOTO BASIC
//!
//! A line-numbered BASIC with three statements: `PRINT`, `LET`, and `GOTO`.
//!
//! Run a program file with the `basic` executable.
//! ```text
//! $ cat hello.bas
//! 10 LET A=5
//! 20 PRINT "A=";A
//! $ basic --no-dump hello.bas
//! A=5
//! ```
//!
//! The library parses lines with [`lang`] and runs them with [`mach`].
//! ```
//! use basic::mach::Runtime;
//! let mut runtime = Runtime::new();
//! runtime.enter("10 PRINT \"HI\"").unwrap();
//! let mut out = Vec::new();
//! runtime.run(&mut out).unwrap();
//! assert_eq!(out, b"HI\n");
//! ```

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod _Statements;

#[path = "doc/errors.rs"]
#[allow(non_snake_case)]
pub mod __Errors;

pub mod lang;
pub mod mach;
pub mod term;
