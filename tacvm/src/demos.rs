//! Bundled demo programs, used by the driver and the benchmarks.
//!
//! Programs are built in code; the engine has no textual front end.

use crate::instruction::Instruction;
use crate::location::Location;

/// A named program that can be rebuilt on demand.
pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Vec<Instruction>,
}

impl Demo {
    /// Builds a fresh copy of the program.
    pub fn program(&self) -> Vec<Instruction> {
        (self.build)()
    }
}

pub static DEMOS: &[Demo] = &[
    Demo {
        name: "declare",
        description: "declare a single local and leave it unbound",
        build: || vec![Instruction::declare_local("x")],
    },
    Demo {
        name: "move",
        description: "bind a constant, then copy it into a second local",
        build: || {
            vec![
                Instruction::declare_local("x"),
                Instruction::declare_local("y"),
                Instruction::mov("x", 3.0),
                Instruction::mov("y", "x"),
            ]
        },
    },
    Demo {
        name: "add",
        description: "add two constants",
        build: || {
            vec![
                Instruction::declare_local("a"),
                Instruction::add("a", 2.0, 5.0),
            ]
        },
    },
    Demo {
        name: "sub",
        description: "chain temporaries through add and subtract",
        build: || {
            vec![
                Instruction::declare_local("x"),
                Instruction::declare_local(0u32),
                Instruction::declare_local(1u32),
                Instruction::mov("x", 10.0),
                Instruction::add(0u32, "x", 2.5),
                Instruction::sub(1u32, 0u32, Location::constant(4.0)),
                Instruction::mov("x", 1u32),
            ]
        },
    },
    Demo {
        name: "undeclared",
        description: "store into a local that was never declared",
        build: || vec![Instruction::mov("y", 1.0)],
    },
    Demo {
        name: "unbound",
        description: "read a local before it holds a value",
        build: || {
            vec![
                Instruction::declare_local("x"),
                Instruction::mov("x", "x"),
            ]
        },
    },
];

/// Looks up a demo by name.
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}
