//! Command registry
//!
//! Holds the three static lookup tables: simple aliases, composite command
//! definitions, and the set of native git command names that pass through
//! verbatim. The registry is built once at startup, optionally extended from
//! a user configuration file, and never mutated afterwards. Tokens are
//! case-sensitive and compared by exact string equality.

use crate::error::{Result, XgitError};
use std::collections::{HashMap, HashSet};

/// A simple alias: token expands to a fixed git argument prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub token: String,
    /// Leading git arguments the token expands to
    pub prefix: Vec<String>,
    /// One-line description shown in help listings
    pub summary: String,
}

/// One argument position inside a composite step template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepArg {
    /// A literal argument passed through as-is
    Lit(String),
    /// A placeholder filled from the caller's trailing arguments
    Slot { index: usize, default: Option<String> },
}

impl StepArg {
    /// Parse a template string into a step argument.
    ///
    /// `{0}` is a required slot, `{1:main}` a slot with a default value.
    /// Anything that does not match the placeholder shape is a literal.
    /// A placeholder-shaped string with a non-numeric index is an error.
    pub fn parse(raw: &str) -> Result<Self> {
        let Some(inner) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
            return Ok(Self::Lit(raw.to_string()));
        };

        let (index_str, default) = match inner.split_once(':') {
            Some((idx, def)) => (idx, Some(def.to_string())),
            None => (inner, None),
        };

        let index = index_str.parse::<usize>().map_err(|_| {
            XgitError::config(format!("invalid step placeholder: {raw}"))
        })?;

        Ok(Self::Slot { index, default })
    }
}

/// One step of a composite command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTemplate {
    /// Progress line printed before the step runs
    pub label: Option<String>,
    pub parts: Vec<StepArg>,
}

impl StepTemplate {
    /// Render the template into a concrete git argv by substituting slots
    /// with the caller's trailing arguments.
    ///
    /// Slots without a default must be covered by the composite's
    /// `min_args`, which the registry validates at insertion time.
    pub fn render(&self, args: &[String]) -> Vec<String> {
        self.parts
            .iter()
            .map(|part| match part {
                StepArg::Lit(lit) => lit.clone(),
                StepArg::Slot { index, default } => args
                    .get(*index)
                    .cloned()
                    .or_else(|| default.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Human-readable form of the step, placeholders shown as `<N>`
    pub fn display(&self) -> String {
        let rendered: Vec<String> = self
            .parts
            .iter()
            .map(|part| match part {
                StepArg::Lit(lit) => lit.clone(),
                StepArg::Slot { index, default } => match default {
                    Some(def) => format!("<{index}:{def}>"),
                    None => format!("<{index}>"),
                },
            })
            .collect();
        rendered.join(" ")
    }
}

/// A composite command: an ordered sequence of git invocations driven by a
/// declarative step list with placeholder slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeSpec {
    pub token: String,
    pub summary: String,
    /// Usage line printed when the required argument is missing
    pub usage: String,
    /// Minimum number of caller arguments required before any step runs
    pub min_args: usize,
    pub steps: Vec<StepTemplate>,
}

/// A named help category and the tokens listed under it
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub tokens: Vec<String>,
}

/// Read-only registry of all known tokens
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    aliases: HashMap<String, AliasEntry>,
    composites: HashMap<String, CompositeSpec>,
    native: HashSet<String>,
    categories: Vec<Category>,
}

impl CommandRegistry {
    /// Build the registry with the built-in command tables
    pub fn builtin() -> Self {
        let mut registry = Self::default();

        let alias_table: &[(&str, &[&str], &str)] = &[
            // Repository
            ("kl", &["clone"], "Clone a repository (ke long) → git clone <url>"),
            ("csh", &["init"], "Initialize a repository (chu shi hua) → git init"),
            // Files
            ("tja", &["add"], "Stage files (tian jia) → git add <file>"),
            ("tj", &["commit"], "Commit changes (ti jiao) → git commit -m <message>"),
            ("ch", &["checkout", "--"], "Discard file changes (che hui) → git checkout -- <file>"),
            // Branches
            ("fz", &["branch"], "List branches (fen zhi) → git branch"),
            ("fzxq", &["branch", "-v"], "Branch details (fen zhi xiang qing) → git branch -v"),
            ("ycfz", &["branch", "-r"], "Remote branches (yuan cheng fen zhi) → git branch -r"),
            ("cjfz", &["checkout", "-b"], "Create a branch (chuang jian fen zhi) → git checkout -b <branch>"),
            ("qhfz", &["checkout"], "Switch branches (qie huan fen zhi) → git checkout <branch>"),
            // Remotes
            ("ts", &["push"], "Push commits (tui song) → git push"),
            ("lq", &["pull"], "Pull changes (la qu) → git pull"),
            ("hq", &["fetch"], "Fetch updates (huo qu) → git fetch"),
            ("ycck", &["remote", "-v"], "Show remotes (yuan cheng cha kan) → git remote -v"),
            ("yctz", &["remote", "add"], "Add a remote (yuan cheng tian jia) → git remote add <name> <url>"),
            ("ycsc", &["remote", "remove"], "Remove a remote (yuan cheng shan chu) → git remote remove <name>"),
            ("yczm", &["remote", "rename"], "Rename a remote (yuan cheng zhong ming) → git remote rename <old> <new>"),
            ("ycxg", &["remote", "set-url"], "Change a remote URL (yuan cheng xiu gai) → git remote set-url <name> <url>"),
            ("ycxq", &["remote", "show"], "Remote details (yuan cheng xiang qing) → git remote show <name>"),
            // Advanced
            ("hb", &["merge"], "Merge a branch (he bing) → git merge <branch>"),
            ("zf", &["rebase"], "Rebase onto a branch (zheng he) → git rebase <branch>"),
            ("ht", &["reset"], "Reset changes (hui tui) → git reset"),
            // Logs
            ("rz", &["log"], "Show the log (ri zhi) → git log"),
            ("yhrz", &["log", "--oneline"], "One-line log (yi hang ri zhi) → git log --oneline"),
            // Status
            ("zt", &["status"], "Show status (zhuang tai) → git status"),
            ("ztxq", &["status", "-s"], "Short status (zhuang tai xiang qing) → git status -s"),
            // Tags
            ("bq", &["tag"], "List tags (biao qian) → git tag"),
            ("cjbq", &["tag", "-a"], "Create a tag (chuang jian biao qian) → git tag -a <tag> -m <message>"),
            ("bqxq", &["tag", "-l"], "Tag details (biao qian xiang qing) → git tag -l"),
        ];

        for (token, prefix, summary) in alias_table {
            let entry = AliasEntry {
                token: (*token).to_string(),
                prefix: prefix.iter().map(ToString::to_string).collect(),
                summary: (*summary).to_string(),
            };
            registry
                .insert_alias(entry)
                .expect("built-in alias table must be consistent");
        }

        let composites = [
            CompositeSpec {
                token: "kstj".to_string(),
                summary: "Quick commit (kuai su ti jiao) → git add . && git commit -m <message> && git push"
                    .to_string(),
                usage: "xgit kstj \"<message>\"".to_string(),
                min_args: 1,
                steps: vec![
                    step(Some("Staging all changes"), &["add", "."]),
                    step(Some("Committing"), &["commit", "-m", "{0}"]),
                    step(Some("Pushing to remote"), &["push"]),
                ],
            },
            CompositeSpec {
                token: "ycsh".to_string(),
                summary: "Remote setup (yuan cheng she zhi) → git remote add origin <url> && git push -u origin <branch>"
                    .to_string(),
                usage: "xgit ycsh <url> [branch]".to_string(),
                min_args: 1,
                steps: vec![
                    step(Some("Adding remote origin"), &["remote", "add", "origin", "{0}"]),
                    step(Some("Pushing with upstream"), &["push", "-u", "origin", "{1:main}"]),
                ],
            },
        ];

        for spec in composites {
            registry
                .insert_composite(spec)
                .expect("built-in composite table must be consistent");
        }

        for name in [
            "add", "commit", "push", "pull", "clone", "init", "status", "branch", "checkout",
            "merge", "rebase", "reset", "log", "fetch", "remote", "tag", "diff", "stash",
        ] {
            registry.add_native(name);
        }

        registry.categories = [
            ("Repository", &["kl", "csh"][..]),
            ("Files", &["tja", "tj", "ch"]),
            ("Branches", &["fz", "fzxq", "ycfz", "cjfz", "qhfz"]),
            ("Remotes", &["ts", "lq", "hq", "ycck", "yctz", "ycsc", "yczm", "ycxg", "ycxq"]),
            ("Advanced", &["hb", "zf", "ht"]),
            ("Logs", &["rz", "yhrz"]),
            ("Status", &["zt", "ztxq"]),
            ("Tags", &["bq", "cjbq", "bqxq"]),
            ("Composite", &["kstj", "ycsh"]),
        ]
        .iter()
        .map(|(name, tokens)| Category {
            name: (*name).to_string(),
            tokens: tokens.iter().map(ToString::to_string).collect(),
        })
        .collect();

        registry
    }

    /// Look up a simple alias by token
    pub fn lookup_simple(&self, token: &str) -> Option<&AliasEntry> {
        self.aliases.get(token)
    }

    /// Look up a composite definition by token
    pub fn lookup_composite(&self, token: &str) -> Option<&CompositeSpec> {
        self.composites.get(token)
    }

    /// Whether the name is a recognized native git command
    pub fn is_native_command(&self, name: &str) -> bool {
        self.native.contains(name)
    }

    /// Help summary for a token, composite entries taking precedence
    pub fn summary(&self, token: &str) -> Option<&str> {
        self.composites
            .get(token)
            .map(|spec| spec.summary.as_str())
            .or_else(|| self.aliases.get(token).map(|entry| entry.summary.as_str()))
    }

    /// Help categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Insert a simple alias, replacing any existing alias with the same
    /// token. Fails if the token is already a composite.
    pub fn insert_alias(&mut self, entry: AliasEntry) -> Result<()> {
        if self.composites.contains_key(&entry.token) {
            return Err(XgitError::config(format!(
                "token '{}' is defined as both an alias and a composite",
                entry.token
            )));
        }
        if entry.prefix.is_empty() {
            return Err(XgitError::config(format!(
                "alias '{}' expands to an empty git command",
                entry.token
            )));
        }
        self.aliases.insert(entry.token.clone(), entry);
        Ok(())
    }

    /// Insert a composite definition, replacing any existing composite with
    /// the same token. Fails if the token is already a simple alias, or if a
    /// step references a slot without a default that `min_args` does not
    /// guarantee to be present.
    pub fn insert_composite(&mut self, spec: CompositeSpec) -> Result<()> {
        if self.aliases.contains_key(&spec.token) {
            return Err(XgitError::config(format!(
                "token '{}' is defined as both an alias and a composite",
                spec.token
            )));
        }
        if spec.steps.is_empty() {
            return Err(XgitError::config(format!(
                "composite '{}' has no steps",
                spec.token
            )));
        }
        for step in &spec.steps {
            for part in &step.parts {
                if let StepArg::Slot { index, default: None } = part
                    && *index >= spec.min_args
                {
                    return Err(XgitError::config(format!(
                        "composite '{}' uses slot {{{index}}} but requires only {} argument(s)",
                        spec.token, spec.min_args
                    )));
                }
            }
        }
        self.composites.insert(spec.token.clone(), spec);
        Ok(())
    }

    /// Add a native git command name to the pass-through set
    pub fn add_native(&mut self, name: &str) {
        self.native.insert(name.to_string());
    }

    /// Append a help category after the built-in ones
    pub fn push_category(&mut self, category: Category) {
        self.categories.push(category);
    }
}

fn step(label: Option<&str>, parts: &[&str]) -> StepTemplate {
    StepTemplate {
        label: label.map(ToString::to_string),
        parts: parts
            .iter()
            .map(|raw| StepArg::parse(raw).expect("built-in step template must be valid"))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_builtin_alias_prefixes() {
        let registry = CommandRegistry::builtin();

        let cases = [
            ("kl", vec!["clone"]),
            ("csh", vec!["init"]),
            ("tj", vec!["commit"]),
            ("ch", vec!["checkout", "--"]),
            ("cjfz", vec!["checkout", "-b"]),
            ("yhrz", vec!["log", "--oneline"]),
            ("ycxg", vec!["remote", "set-url"]),
            ("cjbq", vec!["tag", "-a"]),
        ];

        for (token, expected) in cases {
            let entry = registry.lookup_simple(token).unwrap();
            assert_eq!(entry.prefix, args(&expected));
        }
    }

    #[test]
    fn test_builtin_composite_steps() {
        let registry = CommandRegistry::builtin();

        let kstj = registry.lookup_composite("kstj").unwrap();
        assert_eq!(kstj.min_args, 1);
        assert_eq!(kstj.steps.len(), 3);
        assert_eq!(kstj.steps[0].render(&[]), args(&["add", "."]));

        let ycsh = registry.lookup_composite("ycsh").unwrap();
        assert_eq!(ycsh.steps.len(), 2);
    }

    #[test]
    fn test_native_command_set() {
        let registry = CommandRegistry::builtin();

        for name in ["add", "status", "diff", "stash", "remote"] {
            assert!(registry.is_native_command(name), "{name} should be native");
        }
        assert!(!registry.is_native_command("kl"));
        assert!(!registry.is_native_command("invalidcommand"));
        assert!(!registry.is_native_command(""));
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let registry = CommandRegistry::builtin();

        assert!(registry.lookup_simple("KL").is_none());
        assert!(registry.lookup_composite("KSTJ").is_none());
        assert!(!registry.is_native_command("Add"));
    }

    #[test]
    fn test_every_token_has_a_summary_and_category() {
        let registry = CommandRegistry::builtin();

        let categorized: Vec<&String> = registry
            .categories()
            .iter()
            .flat_map(|category| category.tokens.iter())
            .collect();

        for token in registry.aliases.keys().chain(registry.composites.keys()) {
            assert!(registry.summary(token).is_some(), "{token} has no summary");
            assert!(
                categorized.contains(&token),
                "{token} is not listed in any category"
            );
        }
    }

    #[test]
    fn test_alias_and_composite_tokens_are_disjoint() {
        let registry = CommandRegistry::builtin();

        for token in registry.aliases.keys() {
            assert!(registry.lookup_composite(token).is_none());
        }
    }

    #[test]
    fn test_insert_rejects_cross_table_duplicates() {
        let mut registry = CommandRegistry::builtin();

        let duplicate = AliasEntry {
            token: "kstj".to_string(),
            prefix: args(&["push"]),
            summary: String::new(),
        };
        assert!(registry.insert_alias(duplicate).is_err());

        let duplicate = CompositeSpec {
            token: "kl".to_string(),
            summary: String::new(),
            usage: String::new(),
            min_args: 0,
            steps: vec![step(None, &["fetch"])],
        };
        assert!(registry.insert_composite(duplicate).is_err());
    }

    #[test]
    fn test_insert_rejects_uncovered_slot() {
        let mut registry = CommandRegistry::default();

        let spec = CompositeSpec {
            token: "broken".to_string(),
            summary: String::new(),
            usage: String::new(),
            min_args: 1,
            steps: vec![step(None, &["commit", "-m", "{1}"])],
        };
        assert!(registry.insert_composite(spec).is_err());
    }

    #[test]
    fn test_step_arg_parsing() {
        assert_eq!(
            StepArg::parse("push").unwrap(),
            StepArg::Lit("push".to_string())
        );
        assert_eq!(
            StepArg::parse("{0}").unwrap(),
            StepArg::Slot {
                index: 0,
                default: None
            }
        );
        assert_eq!(
            StepArg::parse("{1:main}").unwrap(),
            StepArg::Slot {
                index: 1,
                default: Some("main".to_string())
            }
        );
        assert!(StepArg::parse("{x}").is_err());
    }

    #[test]
    fn test_step_render_with_default_override() {
        let template = step(None, &["push", "-u", "origin", "{1:main}"]);

        assert_eq!(
            template.render(&args(&["url"])),
            args(&["push", "-u", "origin", "main"])
        );
        assert_eq!(
            template.render(&args(&["url", "develop"])),
            args(&["push", "-u", "origin", "develop"])
        );
    }
}
