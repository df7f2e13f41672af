//! Recoverable execution errors.
//!
//! Programmer errors, such as resolving a `None` location, are not part of
//! this type. They panic.

use crate::instruction::OpCode;
use crate::location::Location;
use std::fmt;

/// Error reported by an execution that stopped on a failing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecError {
    /// The instruction's opcode has no implemented behavior in this context.
    UnhandledInstruction { op: OpCode },
    /// A store targets a location that was never declared.
    UnresolvedLocation { location: Location },
    /// An operand is declared but holds no value yet.
    UnboundValue { location: Location },
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::UnhandledInstruction { op } => {
                write!(f, "instruction not handled: {op:?}")
            }
            ExecError::UnresolvedLocation { location } => {
                write!(f, "location `{location}` was not declared")
            }
            ExecError::UnboundValue { location } => {
                write!(f, "location `{location}` has no value")
            }
        }
    }
}

impl std::error::Error for ExecError {}
