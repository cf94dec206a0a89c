//! # xgit
//!
//! A command-line alias layer in front of git: short pinyin-initial tokens
//! resolve against a static registry into one or more git invocations, with
//! trailing arguments forwarded verbatim and git's exit status mirrored.
//!
//! ## Features
//!
//! - Simple aliases, multi-step composite commands, and native pass-through
//! - Composite steps run strictly in order and stop at the first failure
//! - Inherited standard streams, so interactive git behaves as usual
//! - Optional TOML configuration extending the built-in tables
//!
//! ## Example
//!
//! ```no_run
//! use xgit::core::{CommandRegistry, Resolution, Resolver};
//!
//! let registry = CommandRegistry::builtin();
//! let resolver = Resolver::new(&registry);
//! let args = vec!["-m".to_string(), "message".to_string()];
//! if let Resolution::Simple(argv) = resolver.resolve("tj", &args) {
//!     assert_eq!(argv, ["commit", "-m", "message"]);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Diagnostics go to stderr; stdout is reserved for command output.
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
