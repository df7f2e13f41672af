use crate::error::ExecError;
use crate::instruction::OpCode;
use crate::location::Const;

/// Trait for evaluating binary operations on resolved constants.
pub trait BinaryEval {
    /// Evaluates the operation on two operands.
    ///
    /// # Arguments
    /// * `left` - Value of the `lhs` slot
    /// * `right` - Value of the `rhs` slot
    ///
    /// # Returns
    /// * `Ok(Const)` - Result of the operation
    /// * `Err(ExecError::UnhandledInstruction)` - If the opcode is not a binary operation
    fn eval(&self, left: Const, right: Const) -> Result<Const, ExecError>;
}

impl BinaryEval for OpCode {
    fn eval(&self, left: Const, right: Const) -> Result<Const, ExecError> {
        match self {
            OpCode::Add => Ok(left + right),
            OpCode::Subtract => Ok(left - right),
            OpCode::DeclareLocal | OpCode::Move => {
                Err(ExecError::UnhandledInstruction { op: *self })
            }
        }
    }
}
