//! Console raffle ticket manager
//!
//! A thin shell over [`raffle_app::Runtime`] that wires it to the process:
//! standard input and output, command-line flags, logging and OS randomness.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod args;
pub mod system_env;

pub use args::Args;
pub use raffle_app::{PromptError, Runtime};
pub use system_env::SystemEnv;
