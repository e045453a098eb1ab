//! Application layer for the console raffle
//!
//! Line-oriented prompting and the interactive menu loop, generic over any
//! [`std::io::BufRead`] input and [`std::io::Write`] output so that the same
//! code runs against a terminal in production and in-memory buffers in tests.
//!
//! # Components
//!
//! - [`Prompter`]: validated line, integer and numbered-selection input
//! - [`Raffle`]: owns the ticket registry and runs one menu cycle at a time
//! - [`Runtime`]: repeats menu cycles until the operator stops the program

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod prompt;
mod runtime;

pub use engine::Raffle;
pub use prompt::{PromptError, Prompter};
pub use runtime::{LoopState, Runtime};
