//! Top-level command dispatch
//!
//! Routes the caller's token: reserved help tokens go to presentation, the
//! `git` token is a verbatim pass-through, everything else goes through the
//! resolver. Every path returns the process exit code; nothing exits from
//! inside the engine.

use crate::cli::help;
use crate::core::executor::{CommandRunner, FALLBACK_EXIT_CODE};
use crate::core::registry::CommandRegistry;
use crate::core::resolver::{Resolution, Resolver};
use crate::core::sequencer;
use crate::error::XgitError;
use tracing::debug;

/// Exit code for a token no table knows
pub const UNKNOWN_EXIT_CODE: i32 = 1;

/// Dispatch the full argument vector and return the process exit code
pub fn execute<R: CommandRunner>(
    registry: &CommandRegistry,
    argv: &[String],
    runner: &mut R,
) -> i32 {
    let Some((token, rest)) = argv.split_first() else {
        help::show_usage();
        return 0;
    };

    match token.as_str() {
        "bz" | "help" => {
            help::show_help(registry, rest);
            0
        }
        "git" => run_single(runner, rest.to_vec()),
        _ => dispatch_token(registry, token, rest, runner),
    }
}

fn dispatch_token<R: CommandRunner>(
    registry: &CommandRegistry,
    token: &str,
    args: &[String],
    runner: &mut R,
) -> i32 {
    let resolver = Resolver::new(registry);

    match resolver.resolve(token, args) {
        Resolution::Composite(spec) => sequencer::run_composite(spec, args, runner),
        Resolution::Simple(argv) | Resolution::Native(argv) => run_single(runner, argv),
        Resolution::Unknown => {
            eprintln!("error: {}", XgitError::unknown_command(token));
            eprintln!("run 'xgit bz' to list available commands");
            UNKNOWN_EXIT_CODE
        }
    }
}

/// Run one invocation and mirror its exit status
fn run_single<R: CommandRunner>(runner: &mut R, argv: Vec<String>) -> i32 {
    match runner.run(&argv) {
        Ok(result) => {
            debug!("child exited with {:?}", result.exit_code);
            result.code()
        }
        Err(e) => {
            eprintln!("error: {e}");
            FALLBACK_EXIT_CODE
        }
    }
}
