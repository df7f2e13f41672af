//! Operand locations.
//!
//! A [`Location`] names where a value lives (a variable or a compiler
//! temporary), carries a literal constant inline, or marks an operand slot
//! that is not used by an instruction.

use std::fmt;

/// Type of the literal constants handled by the engine.
pub type Const = f64;

/// Operand of a three-address instruction.
///
/// Equality compares the variant first and then its payload, so a variable
/// never equals a temporary even if their renderings match. Cloning a
/// `Variable` clones its name, two locations never share name storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Location {
    /// Named variable. Owns its name.
    Variable(String),
    /// Compiler generated slot.
    Temporary(u32),
    /// Literal value.
    Constant(Const),
    /// No location supplied. Fills unused operand slots.
    #[default]
    None,
}

impl Location {
    /// Create a variable location, copying `name`.
    pub fn var(name: &str) -> Self {
        Location::Variable(name.to_owned())
    }

    /// Create a temporary slot location.
    pub fn tmp(index: u32) -> Self {
        Location::Temporary(index)
    }

    /// Create a literal constant location.
    pub fn constant(value: Const) -> Self {
        Location::Constant(value)
    }

    /// The empty location.
    pub fn none() -> Self {
        Location::None
    }

    /// Whether this is the empty location.
    pub fn is_none(&self) -> bool {
        matches!(self, Location::None)
    }

    /// Human readable rendering of this location.
    ///
    /// Constants use six fixed decimal places, non-finite constants render as
    /// `inf`, `-inf`, `nan` or `-nan`; `None` renders as `NONE`.
    ///
    /// # Panics
    /// If the formatter reports an error, which is treated as a fatal fault.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Variable(name) => f.write_str(name),
            Location::Temporary(index) => write!(f, "{index}"),
            Location::Constant(value) if value.is_nan() => {
                f.write_str(if value.is_sign_negative() { "-nan" } else { "nan" })
            }
            Location::Constant(value) => write!(f, "{value:.6}"),
            Location::None => f.write_str("NONE"),
        }
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Location::var(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Location::Variable(name)
    }
}

impl From<u32> for Location {
    fn from(index: u32) -> Self {
        Location::Temporary(index)
    }
}

impl From<Const> for Location {
    fn from(value: Const) -> Self {
        Location::Constant(value)
    }
}
