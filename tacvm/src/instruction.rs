//! Three-address instructions.
//!
//! Every instruction has the fixed shape `to = lhs OP rhs`. Slots an opcode
//! does not use carry [`Location::None`].

use crate::location::Location;
use std::fmt;

/// Operation performed by an [`Instruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// Introduce `to` in the binding environment with no value.
    DeclareLocal,
    /// `to = lhs + rhs`
    Add,
    /// `to = lhs - rhs`
    Subtract,
    /// `to = rhs`
    Move,
}

impl OpCode {
    /// Operator symbol used when rendering binary operations.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            OpCode::Add => Some("+"),
            OpCode::Subtract => Some("-"),
            OpCode::DeclareLocal | OpCode::Move => None,
        }
    }
}

/// Immutable three-address instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    op: OpCode,
    to: Location,
    lhs: Location,
    rhs: Location,
}

impl Instruction {
    /// Builds an instruction from raw slots. No shape checks are made.
    pub fn new(op: OpCode, to: Location, lhs: Location, rhs: Location) -> Self {
        Self { op, to, lhs, rhs }
    }

    /// `local to`
    pub fn declare_local(to: impl Into<Location>) -> Self {
        Self::new(OpCode::DeclareLocal, to.into(), Location::None, Location::None)
    }

    /// `to = src`. The source goes into the `rhs` slot.
    pub fn mov(to: impl Into<Location>, src: impl Into<Location>) -> Self {
        Self::new(OpCode::Move, to.into(), Location::None, src.into())
    }

    /// `to = lhs + rhs`
    pub fn add(
        to: impl Into<Location>,
        lhs: impl Into<Location>,
        rhs: impl Into<Location>,
    ) -> Self {
        Self::new(OpCode::Add, to.into(), lhs.into(), rhs.into())
    }

    /// `to = lhs - rhs`
    pub fn sub(
        to: impl Into<Location>,
        lhs: impl Into<Location>,
        rhs: impl Into<Location>,
    ) -> Self {
        Self::new(OpCode::Subtract, to.into(), lhs.into(), rhs.into())
    }

    /// Operation to perform.
    pub fn op(&self) -> OpCode {
        self.op
    }

    /// Destination slot.
    pub fn to(&self) -> &Location {
        &self.to
    }

    /// Left operand. `None` unless the opcode is binary.
    pub fn lhs(&self) -> &Location {
        &self.lhs
    }

    /// Right operand, or the source of a move.
    pub fn rhs(&self) -> &Location {
        &self.rhs
    }
}

/// Debug rendering of the instruction. Accepts any operand shape, including
/// `None` in slots the opcode actually reads.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            OpCode::DeclareLocal => write!(f, "local {}", self.to),
            OpCode::Move => write!(f, "{} = {}", self.to, self.rhs),
            OpCode::Add | OpCode::Subtract => {
                let symbol = self.op.symbol().unwrap_or("?");
                write!(f, "{} = {} {} {}", self.to, self.lhs, symbol, self.rhs)
            }
        }
    }
}
