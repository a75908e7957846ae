// Property tests for the validator and the step/back round trip

use proptest::prelude::*;

use tapewind::interpreter::{Interpreter, RuntimeError};
use tapewind::program::match_brackets;

/// The classic acceptance criterion: bracket counts balance and no prefix
/// closes more than it has opened.
fn balanced(source: &str) -> bool {
    let mut depth: i64 = 0;
    for c in source.chars() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn observable_state(interp: &Interpreter) -> (Vec<u8>, usize, Option<usize>, String, usize) {
    (
        interp.tape().to_vec(),
        interp.tape_pointer(),
        interp.instruction_pointer(),
        interp.output().to_string(),
        interp.instruction_count(),
    )
}

proptest! {
    #[test]
    fn validator_accepts_iff_brackets_balance(source in "[\\[\\]+\\-><a ]{0,40}") {
        let program: Vec<char> = source.chars().collect();
        prop_assert_eq!(match_brackets(&program).is_ok(), balanced(&source));
    }

    #[test]
    fn jump_table_is_symmetric_and_ordered(source in "[\\[\\]+\\-><a ]{0,40}") {
        let program: Vec<char> = source.chars().collect();
        if let Ok(table) = match_brackets(&program) {
            for (&from, &to) in &table {
                prop_assert_eq!(table.get(&to).copied(), Some(from));
                if program[from] == '[' {
                    prop_assert!(from < to);
                }
            }
        }
    }

    /// Bracket-free programs cannot loop, so stepping to the end always
    /// terminates; step followed by back must restore every observable
    /// axis of state, and failed steps must change nothing.
    #[test]
    fn step_then_back_round_trips(source in "[+\\-><.,a]{0,60}") {
        let mut interp = Interpreter::new(
            &source,
            Box::new(|| Some('x')),
            None,
        ).expect("bracket-free programs always validate");

        loop {
            let before = observable_state(&interp);
            match interp.step() {
                Ok(_) => {
                    interp.back().expect("back after a successful step");
                    prop_assert_eq!(&before, &observable_state(&interp));
                    interp.step().expect("redo after back");
                }
                Err(RuntimeError::ExecutionEnded) => break,
                Err(RuntimeError::InvalidTapeCell { .. }) => {
                    // Transactional failure: nothing may have moved, and
                    // the program is permanently stuck here.
                    prop_assert_eq!(&before, &observable_state(&interp));
                    break;
                }
                Err(e) => panic!("unexpected step failure: {}", e),
            }
        }
    }

    /// Rolling everything back returns the engine to its initial state.
    #[test]
    fn full_rewind_restores_initial_state(source in "[+\\-><.,a]{0,40}") {
        let mut interp = Interpreter::new(
            &source,
            Box::new(|| Some('x')),
            None,
        ).expect("bracket-free programs always validate");
        let initial = observable_state(&interp);

        let mut steps = 0usize;
        while interp.step().is_ok() {
            steps += 1;
        }
        // The final failed step may leave one dead-weight history entry
        // behind (comment scan ran off the end), so rewinding can take
        // one extra back().
        let performed = interp.jump(-(steps as i64) - 5);
        prop_assert!(performed == steps || performed == steps + 1);
        prop_assert_eq!(&initial, &observable_state(&interp));
    }

    /// The tape only ever grows by trailing zero cells that '>' walked
    /// onto, so its length never exceeds steps + 1.
    #[test]
    fn tape_growth_is_bounded_by_steps(source in "[+\\-><.,a]{0,60}") {
        let mut interp = Interpreter::new(
            &source,
            Box::new(|| Some('x')),
            None,
        ).expect("bracket-free programs always validate");

        let mut steps = 0usize;
        while interp.step().is_ok() {
            steps += 1;
        }
        prop_assert!(interp.tape().len() <= steps + 1);
    }
}
