/*!
## Rust Machine Module

This Rust module stores a parsed program and executes it.

*/

mod listing;
mod program;
mod runtime;
mod val;
mod var;

pub use listing::Listing;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;
