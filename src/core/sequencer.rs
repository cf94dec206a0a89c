//! Composite command sequencing
//!
//! Interprets a composite's declarative step list: validates that the
//! required caller arguments are present, substitutes placeholder slots,
//! and runs the steps strictly in order, stopping at the first failure.
//! There is no retry and no rollback; effects of completed steps stand.

use crate::core::executor::{CommandRunner, FALLBACK_EXIT_CODE};
use crate::core::registry::CompositeSpec;
use crate::error::XgitError;
use tracing::debug;

/// Exit code for a composite invoked without its mandatory argument
pub const USAGE_EXIT_CODE: i32 = 2;

/// Run all steps of a composite, returning the process exit code.
///
/// Returns zero only when every step ran and exited zero. A failing step's
/// own exit code is returned; later steps are never attempted.
pub fn run_composite<R: CommandRunner>(
    spec: &CompositeSpec,
    args: &[String],
    runner: &mut R,
) -> i32 {
    if args.len() < spec.min_args {
        eprintln!("error: {}", XgitError::missing_argument(&spec.token, &spec.usage));
        eprintln!("usage: {}", spec.usage);
        return USAGE_EXIT_CODE;
    }

    println!("Running composite command: {}", spec.token);

    let total = spec.steps.len();
    for (index, step) in spec.steps.iter().enumerate() {
        let argv = step.render(args);
        match &step.label {
            Some(label) => println!("→ {label}..."),
            None => println!("→ git {}", argv.join(" ")),
        }
        debug!("step {} of {}: git {}", index + 1, total, argv.join(" "));

        match runner.run(&argv) {
            Ok(result) if result.success => {}
            Ok(result) => {
                eprintln!(
                    "step {} of {} failed (git {}): exit code {}",
                    index + 1,
                    total,
                    argv.join(" "),
                    result.code()
                );
                return result.code();
            }
            Err(e) => {
                eprintln!("step {} of {} could not run: {e}", index + 1, total);
                return FALLBACK_EXIT_CODE;
            }
        }
    }

    println!("✓ {} completed", spec.token);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::executor::ExecutionResult;
    use crate::core::registry::CommandRegistry;
    use crate::error::Result;

    /// Records every argv it is asked to run and replays scripted outcomes
    struct FakeRunner {
        invocations: Vec<Vec<String>>,
        outcomes: Vec<Result<ExecutionResult>>,
    }

    impl FakeRunner {
        fn succeeding() -> Self {
            Self {
                invocations: Vec::new(),
                outcomes: Vec::new(),
            }
        }

        fn with_outcomes(outcomes: Vec<Result<ExecutionResult>>) -> Self {
            Self {
                invocations: Vec::new(),
                outcomes,
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&mut self, argv: &[String]) -> Result<ExecutionResult> {
            self.invocations.push(argv.to_vec());
            if self.outcomes.is_empty() {
                Ok(ExecutionResult {
                    exit_code: Some(0),
                    success: true,
                })
            } else {
                self.outcomes.remove(0)
            }
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn exit(code: i32) -> Result<ExecutionResult> {
        Ok(ExecutionResult {
            exit_code: Some(code),
            success: code == 0,
        })
    }

    #[test]
    fn test_quick_commit_runs_all_steps_in_order() {
        let registry = CommandRegistry::builtin();
        let spec = registry.lookup_composite("kstj").unwrap();
        let mut runner = FakeRunner::succeeding();

        let code = run_composite(spec, &args(&["msg"]), &mut runner);

        assert_eq!(code, 0);
        assert_eq!(
            runner.invocations,
            vec![
                args(&["add", "."]),
                args(&["commit", "-m", "msg"]),
                args(&["push"]),
            ]
        );
    }

    #[test]
    fn test_failing_commit_stops_before_push() {
        let registry = CommandRegistry::builtin();
        let spec = registry.lookup_composite("kstj").unwrap();
        let mut runner = FakeRunner::with_outcomes(vec![exit(0), exit(1)]);

        let code = run_composite(spec, &args(&["msg"]), &mut runner);

        assert_eq!(code, 1);
        assert_eq!(runner.invocations.len(), 2, "push must not run");
    }

    #[test]
    fn test_failing_step_exit_code_is_mirrored() {
        let registry = CommandRegistry::builtin();
        let spec = registry.lookup_composite("kstj").unwrap();
        let mut runner = FakeRunner::with_outcomes(vec![exit(128)]);

        let code = run_composite(spec, &args(&["msg"]), &mut runner);

        assert_eq!(code, 128);
        assert_eq!(runner.invocations.len(), 1);
    }

    #[test]
    fn test_missing_argument_runs_nothing() {
        let registry = CommandRegistry::builtin();
        let spec = registry.lookup_composite("kstj").unwrap();
        let mut runner = FakeRunner::succeeding();

        let code = run_composite(spec, &[], &mut runner);

        assert_eq!(code, USAGE_EXIT_CODE);
        assert!(runner.invocations.is_empty());
    }

    #[test]
    fn test_remote_setup_branch_defaults_to_main() {
        let registry = CommandRegistry::builtin();
        let spec = registry.lookup_composite("ycsh").unwrap();
        let mut runner = FakeRunner::succeeding();

        let code = run_composite(spec, &args(&["git@example.com:a/b.git"]), &mut runner);

        assert_eq!(code, 0);
        assert_eq!(
            runner.invocations,
            vec![
                args(&["remote", "add", "origin", "git@example.com:a/b.git"]),
                args(&["push", "-u", "origin", "main"]),
            ]
        );
    }

    #[test]
    fn test_remote_setup_branch_override() {
        let registry = CommandRegistry::builtin();
        let spec = registry.lookup_composite("ycsh").unwrap();
        let mut runner = FakeRunner::succeeding();

        run_composite(
            spec,
            &args(&["git@example.com:a/b.git", "develop"]),
            &mut runner,
        );

        assert_eq!(
            runner.invocations[1],
            args(&["push", "-u", "origin", "develop"])
        );
    }

    #[test]
    fn test_launch_failure_uses_fallback_code() {
        let registry = CommandRegistry::builtin();
        let spec = registry.lookup_composite("ycsh").unwrap();
        let mut runner = FakeRunner::with_outcomes(vec![Err(XgitError::launch(
            "git remote add origin url".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no git"),
        ))]);

        let code = run_composite(spec, &args(&["url"]), &mut runner);

        assert_eq!(code, FALLBACK_EXIT_CODE);
        assert_eq!(runner.invocations.len(), 1);
    }
}
