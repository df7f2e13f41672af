//! Execution of three-address instruction streams.
//!
//! Instructions run strictly in order, one pass, no branches. Each run owns a
//! binding environment that tracks which locations currently resolve to a
//! known constant.

mod binop;
mod engine;

pub use binop::BinaryEval;
pub use engine::{Executor, execute};
