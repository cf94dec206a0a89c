//! Command-line argument parsing

use clap::Parser;

/// xgit - pinyin-initial shortcuts for everyday git commands
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "xgit")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Command token followed by arguments forwarded to git verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub argv: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
