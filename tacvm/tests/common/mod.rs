//! Common test utilities and macros

use tacvm::{BindingState, Executor, Instruction, Location};

#[derive(Debug)]
pub enum TestResult {
    Success,
    SuccessWithBindings(Vec<(Location, BindingState)>),
    Error(String),
    ErrorRegex(String),
}

impl PartialEq for TestResult {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TestResult::Success, TestResult::Success) => true,
            (TestResult::Success, TestResult::SuccessWithBindings(_))
            | (TestResult::SuccessWithBindings(_), TestResult::Success) => true,
            (TestResult::SuccessWithBindings(a), TestResult::SuccessWithBindings(b)) => a == b,
            (TestResult::Error(a), TestResult::Error(b)) => a == b,
            (TestResult::ErrorRegex(pattern), TestResult::Error(msg)) => {
                regex::Regex::new(pattern).unwrap().is_match(msg)
            }
            (TestResult::Error(msg), TestResult::ErrorRegex(pattern)) => {
                regex::Regex::new(pattern).unwrap().is_match(msg)
            }
            _ => false,
        }
    }
}

/// Runs `program` and captures the final environment or the error message.
pub fn run_program(program: &[Instruction]) -> TestResult {
    let mut executor = Executor::new();
    match executor.run(program) {
        Ok(()) => TestResult::SuccessWithBindings(
            executor
                .bindings()
                .iter()
                .map(|b| (b.location.clone(), b.state()))
                .collect(),
        ),
        Err(e) => TestResult::Error(e.to_string()),
    }
}

#[macro_export]
macro_rules! check_program {
    ($test_name:ident, program=[$($instr:expr),* $(,)?], result=$expected:expr) => {
        #[test]
        fn $test_name() {
            let program: Vec<tacvm::Instruction> = vec![$($instr),*];
            let result = crate::common::run_program(&program);
            assert_eq!(result, $expected);
        }
    };
}
