#[macro_use]
mod common;

use common::TestResult;
use std::thread;
use tacvm::{BindingState, ExecError, Executor, Instruction, Location, OpCode, execute};

check_program!(
    test_empty_program,
    program = [],
    result = TestResult::SuccessWithBindings(vec![])
);

check_program!(
    test_declare_then_move_succeeds,
    program = [
        Instruction::declare_local(0u32),
        Instruction::mov(0u32, -1.5),
    ],
    result = TestResult::Success
);

check_program!(
    test_declare_only,
    program = [Instruction::declare_local("x")],
    result = TestResult::SuccessWithBindings(vec![(Location::var("x"), BindingState::Unbound)])
);

// The reference engine falls through from Move into its error case, so every
// Move failed there. Move is expected to bind its target here.
check_program!(
    test_move_does_not_fall_through,
    program = [Instruction::declare_local("x"), Instruction::mov("x", 3.0)],
    result = TestResult::SuccessWithBindings(vec![(Location::var("x"), BindingState::Bound(3.0))])
);

check_program!(
    test_move_undeclared_target,
    program = [Instruction::mov("y", 1.0)],
    result = TestResult::ErrorRegex(r"location `y` was not declared".to_string())
);

check_program!(
    test_move_unbound_source,
    program = [Instruction::declare_local("x"), Instruction::mov("x", "x")],
    result = TestResult::ErrorRegex(r"location `x` has no value".to_string())
);

check_program!(
    test_add_constants,
    program = [Instruction::declare_local("a"), Instruction::add("a", 2.0, 5.0)],
    result = TestResult::SuccessWithBindings(vec![(Location::var("a"), BindingState::Bound(7.0))])
);

check_program!(
    test_subtract_through_temporaries,
    program = [
        Instruction::declare_local("x"),
        Instruction::declare_local(0u32),
        Instruction::mov("x", 10.0),
        Instruction::sub(0u32, "x", 2.5),
        Instruction::add("x", 0u32, 0u32),
    ],
    result = TestResult::SuccessWithBindings(vec![
        (Location::var("x"), BindingState::Bound(15.0)),
        (Location::tmp(0), BindingState::Bound(7.5)),
    ])
);

check_program!(
    test_add_undeclared_target,
    program = [Instruction::add(3u32, 1.0, 1.0)],
    result = TestResult::ErrorRegex(r"location `3` was not declared".to_string())
);

check_program!(
    test_rebinding_overwrites,
    program = [
        Instruction::declare_local("x"),
        Instruction::mov("x", 1.0),
        Instruction::mov("x", 2.0),
    ],
    result = TestResult::SuccessWithBindings(vec![(Location::var("x"), BindingState::Bound(2.0))])
);

check_program!(
    test_duplicate_declaration_shadows,
    program = [
        Instruction::declare_local("x"),
        Instruction::declare_local("x"),
        Instruction::mov("x", 4.0),
    ],
    result = TestResult::SuccessWithBindings(vec![
        (Location::var("x"), BindingState::Bound(4.0)),
        (Location::var("x"), BindingState::Unbound),
    ])
);

check_program!(
    test_stops_at_first_failure,
    program = [
        Instruction::declare_local("x"),
        Instruction::mov("x", "missing"),
        Instruction::mov("y", 1.0),
    ],
    result = TestResult::Error("location `missing` was not declared".to_string())
);

#[test]
fn test_resolve_after_move() {
    let mut executor = Executor::new();
    executor
        .run(&[Instruction::declare_local("x"), Instruction::mov("x", 3.0)])
        .unwrap();
    assert_eq!(executor.bindings().as_const(&Location::var("x")), Ok(3.0));
}

#[test]
fn test_error_variants() {
    assert_eq!(
        execute(&[Instruction::mov("y", 1.0)]),
        Err(ExecError::UnresolvedLocation {
            location: Location::var("y")
        })
    );
    assert_eq!(
        execute(&[Instruction::declare_local(1u32), Instruction::sub(1u32, 1u32, 1.0)]),
        Err(ExecError::UnboundValue {
            location: Location::tmp(1)
        })
    );
}

#[test]
#[should_panic(expected = "NONE location passed to as_const()")]
fn test_add_reading_none_operand_panics() {
    let _ = execute(&[
        Instruction::declare_local("a"),
        Instruction::new(
            OpCode::Add,
            Location::var("a"),
            Location::None,
            Location::constant(1.0),
        ),
    ]);
}

#[test]
fn test_concurrent_executions_are_independent() {
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            thread::spawn(move || {
                let mut executor = Executor::new();
                executor
                    .run(&[
                        Instruction::declare_local(i),
                        Instruction::add(i, i as f64, 1.0),
                    ])
                    .unwrap();
                executor.into_bindings()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let bindings = handle.join().unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(
            bindings.state(&Location::tmp(i as u32)),
            Some(BindingState::Bound(i as f64 + 1.0))
        );
    }
}
