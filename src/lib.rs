//! # GatoCLI
//!
//! A small demonstration command-line utility. The first argument selects one
//! of a fixed set of independent commands (greeting, counting, arithmetic,
//! file echoing, character counting, coin flipping) and the rest are handed
//! to that command's handler.
//!
//! ## Example
//!
//! ```no_run
//! use gatocli::{cli, config::Config, core::coin};
//!
//! let config = Config::default();
//! let mut rng = coin::clock_seeded_rng();
//! let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
//! let argv = vec!["greet".to_string(), "Sam".to_string()];
//! let status = cli::run(&config, Ok(argv), cli::Console::new(&mut out, &mut err), &mut rng);
//! assert_eq!(status, 0);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs are written to stderr; stdout is reserved for command output.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
