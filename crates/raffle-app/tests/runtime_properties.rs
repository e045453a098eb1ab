//! Property-based tests for the menu loop.
//!
//! Arbitrary operator input, including garbage, must never break the ticket
//! registry invariants and must always end either with a clean stop or with
//! the input stream closing.

use std::collections::HashSet;

use proptest::prelude::*;
use raffle_app::{LoopState, PromptError, Runtime};
use raffle_core::{SeededEnv, TicketNumber};

/// Generate one line of operator input.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("1".to_string()),
        4 => Just("2".to_string()),
        1 => Just("3".to_string()),
        1 => Just("0".to_string()),
        1 => Just("-4".to_string()),
        1 => Just(String::new()),
        1 => Just("purchase".to_string()),
        3 => prop::sample::select(vec!["Alice", "Bob", "Carol"]).prop_map(str::to_string),
        2 => (1i64..=500).prop_map(|n| n.to_string()),
    ]
}

proptest! {
    #[test]
    fn prop_session_preserves_registry_invariants(
        seed in any::<u64>(),
        lines in prop::collection::vec(line_strategy(), 0..80),
    ) {
        let mut input = lines.join("\n");
        input.push('\n');

        let mut runtime = Runtime::new(input.as_bytes(), Vec::new(), SeededEnv::with_seed(seed));
        let result = runtime.run();

        match result {
            Ok(()) => prop_assert_eq!(runtime.state(), LoopState::Stopped),
            Err(PromptError::Closed) => prop_assert_eq!(runtime.state(), LoopState::Running),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }

        let mut seen = HashSet::new();
        for (name, ticket) in runtime.raffle().registry().iter() {
            prop_assert!(!name.trim().is_empty());
            prop_assert!((TicketNumber::MIN..=TicketNumber::MAX).contains(&ticket.get()));
            prop_assert!(seen.insert(ticket));
        }
    }

    #[test]
    fn prop_stop_always_ends_the_loop(prefix in prop::collection::vec(line_strategy(), 0..20)) {
        // From any prompt (menu, name, ticket number) a run of "3" lines
        // returns to the menu within two lines and then selects stop.
        let mut input = prefix.join("\n");
        input.push('\n');
        input.push_str(&"3\n".repeat(4));

        let mut runtime = Runtime::new(input.as_bytes(), Vec::new(), SeededEnv::with_seed(0));
        let result = runtime.run();

        prop_assert!(result.is_ok());
        prop_assert_eq!(runtime.state(), LoopState::Stopped);

        let (_, output) = runtime.into_inner();
        let text = String::from_utf8_lossy(&output);
        prop_assert!(text.ends_with("\nThank you for using the raffle.\n"));
    }
}
