//! Core resolution and execution engine
//!
//! - `registry`: static command tables with read-only lookups
//! - `resolver`: token classification and argv construction
//! - `executor`: child process execution with inherited streams
//! - `sequencer`: ordered multi-step execution with short-circuiting

pub mod executor;
pub mod registry;
pub mod resolver;
pub mod sequencer;

pub use executor::{CommandRunner, ExecutionResult, GitExecutor, FALLBACK_EXIT_CODE};
pub use registry::{AliasEntry, Category, CommandRegistry, CompositeSpec, StepArg, StepTemplate};
pub use resolver::{Resolution, Resolver};
