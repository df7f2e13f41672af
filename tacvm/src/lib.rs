//! TacVM Library
//!
//! A minimal three-address code execution engine. Callers build
//! [`Instruction`]s directly over [`Location`]s and hand them to [`execute`],
//! which runs them against a binding environment of known constants.
//!
//! # Example
//! ```
//! use tacvm::{Executor, Instruction, Location};
//!
//! let program = [
//!     Instruction::declare_local("a"),
//!     Instruction::add("a", 2.0, 5.0),
//! ];
//! let mut executor = Executor::new();
//! executor.run(&program)?;
//! assert_eq!(executor.bindings().as_const(&Location::var("a"))?, 7.0);
//! # Ok::<(), tacvm::ExecError>(())
//! ```

pub mod bindings;
pub mod demos;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod location;

pub use bindings::{Binding, BindingState, Bindings};
pub use error::ExecError;
pub use instruction::{Instruction, OpCode};
pub use interpreter::{Executor, execute};
pub use location::{Const, Location};
