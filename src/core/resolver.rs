//! Token resolution
//!
//! Classifies a caller token against the registry and builds the concrete
//! git argv. The check order is a deliberate precedence policy: composite
//! first, then simple alias, then native pass-through. Classification never
//! looks at the trailing arguments, and the arguments are appended verbatim.

use crate::core::registry::{CommandRegistry, CompositeSpec};
use tracing::debug;

/// Outcome of classifying a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Multi-step command, to be run by the sequencer
    Composite(&'a CompositeSpec),
    /// Alias expanded into a single git argv
    Simple(Vec<String>),
    /// The token is itself a git command; forwarded as-is
    Native(Vec<String>),
    /// No table knows this token
    Unknown,
}

/// Resolves tokens against a read-only registry
#[derive(Debug)]
pub struct Resolver<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> Resolver<'a> {
    pub const fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Classify `token` and build the argv for the single-invocation cases
    pub fn resolve(&self, token: &str, args: &[String]) -> Resolution<'a> {
        if let Some(spec) = self.registry.lookup_composite(token) {
            debug!("resolved '{}' as composite ({} steps)", token, spec.steps.len());
            return Resolution::Composite(spec);
        }

        if let Some(entry) = self.registry.lookup_simple(token) {
            let mut argv = entry.prefix.clone();
            argv.extend_from_slice(args);
            debug!("resolved '{}' as alias: git {}", token, argv.join(" "));
            return Resolution::Simple(argv);
        }

        if self.registry.is_native_command(token) {
            let mut argv = vec![token.to_string()];
            argv.extend_from_slice(args);
            debug!("resolved '{}' as native git command", token);
            return Resolution::Native(argv);
        }

        debug!("token '{}' did not resolve", token);
        Resolution::Unknown
    }
}
