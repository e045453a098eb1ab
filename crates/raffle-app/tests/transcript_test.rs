//! Full console transcripts of the menu loop.
//!
//! Each test feeds a scripted operator session through the [`Runtime`] and
//! snapshots everything written to the console. Trailing whitespace is trimmed
//! from each line so that prompts ending in a space stay readable.

use raffle_app::{LoopState, PromptError, Runtime};
use raffle_core::{ScriptedEnv, TicketNumber};

/// Run a session to completion, returning the result and the transcript.
fn session<'a>(
    input: &'a str,
    draws: &[u64],
) -> (Result<(), PromptError>, Runtime<&'a [u8], Vec<u8>, ScriptedEnv>) {
    let mut runtime = Runtime::new(input.as_bytes(), Vec::new(), ScriptedEnv::new(draws));
    let result = runtime.run();
    (result, runtime)
}

/// Console output with per-line trailing whitespace removed.
fn transcript(runtime: Runtime<&[u8], Vec<u8>, ScriptedEnv>) -> String {
    let (_, output) = runtime.into_inner();
    let text = String::from_utf8_lossy(&output).into_owned();
    text.lines().map(str::trim_end).collect::<Vec<_>>().join("\n").trim().to_string()
}

#[test]
fn purchase_then_winning_check() {
    let (result, runtime) = session("2\nAlice\n1\nAlice\n2\n3\n", &[2]);

    assert!(result.is_ok());
    assert_eq!(runtime.state(), LoopState::Stopped);
    assert!(runtime.raffle().registry().is_empty());

    insta::assert_snapshot!(transcript(runtime), @r"
Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
What is your name?
Successfully bought raffle ticket number 2.

Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
What is your name? What is your ticket number?
You won the raffle!

Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
Thank you for using the raffle.
");
}

#[test]
fn rejected_inputs_and_business_rules() {
    let input = "2\nBob\n2\nBob\n5\npurchase\n1\nCarol\n1\nBob\n99\n3\n";
    let (result, runtime) = session(input, &[12]);

    assert!(result.is_ok());
    let bob = runtime.raffle().registry().get("Bob");
    assert_eq!(bob, TicketNumber::new(12).ok());
    assert_eq!(runtime.raffle().registry().len(), 1);

    insta::assert_snapshot!(transcript(runtime), @r"
Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
What is your name?
Successfully bought raffle ticket number 12.

Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
What is your name?
You already have a ticket. Please check it before purchasing another.

Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
Please enter a valid selection index.

Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
You must enter a valid integer.

Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
What is your name?
You haven't bought a ticket yet.

Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
What is your name? What is your ticket number?
You don't own this ticket.

Welcome to the Raffle. Select an option by number from below.
1. check
2. purchase
3. stop program
>
Thank you for using the raffle.
");
}

#[test]
fn losing_check_consumes_ticket() {
    let (result, runtime) = session("2\nDave\n1\nDave\n500\n3\n", &[500]);

    assert!(result.is_ok());
    assert!(runtime.raffle().registry().is_empty());
    let text = transcript(runtime);
    assert!(text.contains("Successfully bought raffle ticket number 500."));
    assert!(text.contains("You lost the raffle."));
    assert!(!text.contains("You won the raffle!"));
}

#[test]
fn collision_gives_second_buyer_a_different_ticket() {
    let (result, runtime) = session("2\nAlice\n2\nBob\n3\n", &[7, 7, 499]);

    assert!(result.is_ok());
    let registry = runtime.raffle().registry();
    assert_eq!(registry.get("Alice"), TicketNumber::new(7).ok());
    assert_eq!(registry.get("Bob"), TicketNumber::new(499).ok());
}

#[test]
fn closed_stream_ends_session_with_error() {
    let (result, runtime) = session("2\nAlice\n", &[3]);

    assert!(matches!(result, Err(PromptError::Closed)));
    assert_eq!(runtime.state(), LoopState::Running);
    assert!(runtime.raffle().registry().contains("Alice"));
}

#[test]
fn closed_stream_while_asking_ticket_number_keeps_ticket() {
    let (result, runtime) = session("2\nAlice\n1\nAlice\n", &[3]);

    assert!(matches!(result, Err(PromptError::Closed)));
    assert_eq!(runtime.raffle().registry().get("Alice"), TicketNumber::new(3).ok());
}

#[test]
fn invalid_utf8_name_does_not_end_session() {
    let input: &[u8] = b"2\nJos\xe9\n2\nAlice\n3\n";
    let mut runtime = Runtime::new(input, Vec::new(), ScriptedEnv::new(&[5, 9]));

    assert!(runtime.run().is_ok());
    assert_eq!(runtime.state(), LoopState::Stopped);

    let registry = runtime.raffle().registry();
    assert_eq!(registry.get("Jos\u{fffd}"), TicketNumber::new(5).ok());
    assert_eq!(registry.get("Alice"), TicketNumber::new(9).ok());

    let text = transcript(runtime);
    assert!(text.contains("Successfully bought raffle ticket number 5."));
    assert!(text.ends_with("Thank you for using the raffle."));
}
