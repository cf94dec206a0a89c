//! Command-line interface module
//!
//! Provides argument parsing, top-level dispatch, and help output.

pub mod args;
pub mod dispatch;
pub mod help;

pub use args::{parse_args, Args};
pub use dispatch::execute;
