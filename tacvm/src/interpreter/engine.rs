use super::binop::BinaryEval;
use crate::bindings::Bindings;
use crate::error::ExecError;
use crate::instruction::{Instruction, OpCode};
use tracing::{debug, info, trace, warn};

/// Executes a sequence of instructions over its own binding environment.
///
/// Every [`Executor::run`] starts from an empty environment. The environment
/// of the last run stays readable afterwards, so callers can inspect the
/// bindings after a successful run or the partial effects left behind by a
/// failing one.
#[derive(Debug, Default)]
pub struct Executor {
    bindings: Bindings,
    steps: usize,
}

impl Executor {
    /// Creates an executor with an empty binding environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `instructions` in order, stopping at the first failure.
    ///
    /// Bindings left by a previous run are discarded first. Effects of
    /// instructions that ran before a failure are kept.
    pub fn run(&mut self, instructions: &[Instruction]) -> Result<(), ExecError> {
        self.bindings = Bindings::new();
        self.steps = 0;

        info!("Starting execution of {} instructions", instructions.len());
        for instr in instructions {
            trace!("instr: {}", instr);
        }

        for (idx, instr) in instructions.iter().enumerate() {
            debug!("Executing [{}] {}", idx, instr);
            if let Err(e) = self.execute_instruction(instr) {
                warn!("Execution stopped at [{}] {}: {}", idx, instr, e);
                return Err(e);
            }
            self.steps += 1;
        }

        info!("Execution finished with {} bindings", self.bindings.len());
        Ok(())
    }

    fn execute_instruction(&mut self, instr: &Instruction) -> Result<(), ExecError> {
        match instr.op() {
            OpCode::DeclareLocal => {
                self.bindings.declare(instr.to().clone());
            }
            OpCode::Move => {
                let value = self.bindings.as_const(instr.rhs())?;
                self.bindings.store(instr.to(), value)?;
            }
            op @ (OpCode::Add | OpCode::Subtract) => {
                let left = self.bindings.as_const(instr.lhs())?;
                let right = self.bindings.as_const(instr.rhs())?;
                let value = op.eval(left, right)?;
                self.bindings.store(instr.to(), value)?;
            }
        }
        Ok(())
    }

    /// Binding environment of the last run.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Consumes the executor, returning its binding environment.
    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }

    /// Number of instructions that completed successfully.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Executes `instructions` with a fresh binding environment that is
/// discarded once the run ends.
pub fn execute(instructions: &[Instruction]) -> Result<(), ExecError> {
    Executor::new().run(instructions)
}
