/*!
# Rust Language Module

This Rust module turns numbered source lines into statements.

*/

/// Label of a program line and the sole jump address.
pub type LineNumber = i32;

#[macro_use]
mod error;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use parse::parse;

pub mod ast;
