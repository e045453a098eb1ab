//! Command-line arguments.

use clap::Parser;

/// Console raffle ticket manager
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "raffle")]
#[command(about = "Buy raffle tickets and check them for a prime-number win")]
#[command(version)]
pub struct Args {
    /// Log input failures and ticket decisions to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Log level (trace, debug, info, warn, error)
    ///
    /// Ignored when `RUST_LOG` is set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Seed for reproducible ticket draws
    ///
    /// If not provided, tickets are drawn from OS randomness.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Log filter directive to use when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &str {
        if self.debug { "debug" } else { &self.log_level }
    }
}
