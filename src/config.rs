//! Registry configuration
//!
//! Builds the command registry from the built-in tables, optionally extended
//! by a user TOML file. A missing file just means builtins only; a file that
//! exists but cannot be read or parsed is a fatal startup error with no
//! partial or degraded mode.
//!
//! ```toml
//! native = ["bisect", "worktree"]
//!
//! [aliases]
//! tb = ["log", "--graph", "--oneline"]
//!
//! [composites.qkfb]
//! usage = "xgit qkfb <message>"
//! min_args = 1
//! steps = [["add", "."], ["commit", "-m", "{0}"]]
//! ```
//!
//! In step templates, `{N}` is filled from the caller's Nth trailing
//! argument and `{N:value}` falls back to `value` when the argument is
//! absent.

use crate::core::registry::{AliasEntry, Category, CommandRegistry, CompositeSpec, StepArg, StepTemplate};
use crate::error::{Result, XgitError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "XGIT_CONFIG";

/// Raw user configuration as deserialized from TOML
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryOverlay {
    #[serde(default)]
    aliases: HashMap<String, AliasDef>,
    #[serde(default)]
    composites: HashMap<String, CompositeDef>,
    #[serde(default)]
    native: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AliasDef {
    Args(Vec<String>),
    Full {
        args: Vec<String>,
        #[serde(default)]
        summary: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompositeDef {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    usage: Option<String>,
    #[serde(default)]
    min_args: usize,
    steps: Vec<Vec<String>>,
}

/// Default config file location: `$XGIT_CONFIG`, else
/// `<config-dir>/xgit/config.toml`
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("xgit").join("config.toml"))
}

/// Build the full registry: builtins plus the user overlay, if any.
///
/// `path` overrides the default location; used by tests.
pub fn load_registry(path: Option<&Path>) -> Result<CommandRegistry> {
    let mut registry = CommandRegistry::builtin();

    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => config_path(),
    };
    let Some(path) = path else {
        return Ok(registry);
    };
    if !path.exists() {
        debug!("no config file at {}, using builtins only", path.display());
        return Ok(registry);
    }

    debug!("loading registry overlay from {}", path.display());
    let raw = std::fs::read_to_string(&path).map_err(|e| {
        XgitError::config_at("failed to read config file", &path, Some(Box::new(e)))
    })?;
    let overlay: RegistryOverlay = toml::from_str(&raw).map_err(|e| {
        XgitError::config_at("failed to parse config file", &path, Some(Box::new(e)))
    })?;

    apply_overlay(&mut registry, overlay)?;
    Ok(registry)
}

fn apply_overlay(registry: &mut CommandRegistry, overlay: RegistryOverlay) -> Result<()> {
    let mut user_tokens = Vec::new();

    for (token, def) in overlay.aliases {
        let (args, summary) = match def {
            AliasDef::Args(args) => (args, None),
            AliasDef::Full { args, summary } => (args, summary),
        };
        let summary =
            summary.unwrap_or_else(|| format!("{token} → git {}", args.join(" ")));
        if registry.lookup_simple(&token).is_none() {
            user_tokens.push(token.clone());
        }
        registry.insert_alias(AliasEntry {
            token,
            prefix: args,
            summary,
        })?;
    }

    for (token, def) in overlay.composites {
        let steps = def
            .steps
            .iter()
            .map(|parts| {
                let parts = parts
                    .iter()
                    .map(|raw| StepArg::parse(raw))
                    .collect::<Result<Vec<_>>>()?;
                Ok(StepTemplate { label: None, parts })
            })
            .collect::<Result<Vec<_>>>()?;
        let summary = def
            .summary
            .unwrap_or_else(|| format!("{token} → composite command ({} steps)", steps.len()));
        let usage = def
            .usage
            .unwrap_or_else(|| format!("xgit {token} <args...>"));
        if registry.lookup_composite(&token).is_none() {
            user_tokens.push(token.clone());
        }
        registry.insert_composite(CompositeSpec {
            token,
            summary,
            usage,
            min_args: def.min_args,
            steps,
        })?;
    }

    for name in &overlay.native {
        registry.add_native(name);
    }

    if !user_tokens.is_empty() {
        user_tokens.sort();
        registry.push_category(Category {
            name: "User".to_string(),
            tokens: user_tokens,
        });
    }

    Ok(())
}
