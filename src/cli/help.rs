//! Help and usage output
//!
//! Pure presentation: reads the registry's summary and category tables and
//! never influences resolution or execution. Help lookups for unknown
//! tokens print a diagnostic but are not failures.

use crate::core::registry::CommandRegistry;

/// Print the short usage summary shown when xgit runs with no arguments
pub fn show_usage() {
    println!("xgit - pinyin-initial shortcuts for everyday git commands");
    println!();
    println!("Usage:");
    println!("  xgit <token> [args...]      # run a pinyin shortcut");
    println!("  xgit git <args...>          # run git directly");
    println!("  xgit bz [token]             # show help");
    println!();
    println!("Common commands:");
    println!("  xgit kl <url>      # clone a repository");
    println!("  xgit tja .         # stage all files");
    println!("  xgit tj -m 'msg'   # commit changes");
    println!("  xgit ts            # push commits");
    println!("  xgit lq            # pull changes");
    println!();
    println!("Run 'xgit bz' for the full command list");
}

/// Print help: the full categorized listing, one token's detail, or the
/// resolved git form with `--git <token>`
pub fn show_help(registry: &CommandRegistry, args: &[String]) {
    let Some(first) = args.first() else {
        show_listing(registry);
        return;
    };

    if first == "--git" {
        if let Some(token) = args.get(1) {
            show_git_equivalent(registry, token);
            return;
        }
    }

    show_token_detail(registry, first);
}

fn show_listing(registry: &CommandRegistry) {
    println!("xgit command list:");
    println!();

    for category in registry.categories() {
        println!("[{}]", category.name);
        for token in &category.tokens {
            if let Some(summary) = registry.summary(token) {
                println!("  {token:<6} {summary}");
            }
        }
        println!();
    }

    println!("Use 'xgit bz <token>' for details on one command");
    println!("Use 'xgit bz --git <token>' for the underlying git command");
}

fn show_token_detail(registry: &CommandRegistry, token: &str) {
    let Some(summary) = registry.summary(token) else {
        println!("unknown command: {token}");
        println!("Run 'xgit bz' to list available commands");
        return;
    };

    println!("Command: {token}");
    println!("Summary: {summary}");

    let examples = usage_examples(token);
    if !examples.is_empty() {
        println!();
        println!("Examples:");
        for example in examples {
            println!("  {example}");
        }
    }
}

fn show_git_equivalent(registry: &CommandRegistry, token: &str) {
    if let Some(entry) = registry.lookup_simple(token) {
        println!("{token} → git {}", entry.prefix.join(" "));
    } else if let Some(spec) = registry.lookup_composite(token) {
        println!("{token} → composite command:");
        for (index, step) in spec.steps.iter().enumerate() {
            println!("  {}. git {}", index + 1, step.display());
        }
    } else {
        println!("unknown command: {token}");
    }
}

fn usage_examples(token: &str) -> &'static [&'static str] {
    match token {
        "kl" => &[
            "xgit kl https://github.com/user/repo.git",
            "xgit kl https://github.com/user/repo.git my-folder",
        ],
        "tj" => &["xgit tj -m \"commit message\"", "xgit tj --amend"],
        "kstj" => &["xgit kstj \"quick commit message\""],
        "ycsh" => &[
            "xgit ycsh git@github.com:user/repo.git",
            "xgit ycsh git@github.com:user/repo.git develop",
        ],
        "cjfz" => &["xgit cjfz feature-branch", "xgit cjfz hotfix/bug-123"],
        "qhfz" => &["xgit qhfz main", "xgit qhfz feature-branch"],
        "hb" => &["xgit hb feature-branch", "xgit hb --no-ff feature-branch"],
        "zf" => &["xgit zf main", "xgit zf origin/main"],
        "cjbq" => &["xgit cjbq v1.0.0 -m \"Release version 1.0.0\""],
        "ch" => &["xgit ch file.txt", "xgit ch ."],
        "ht" => &["xgit ht HEAD~1", "xgit ht --hard HEAD~2"],
        _ => &[],
    }
}
