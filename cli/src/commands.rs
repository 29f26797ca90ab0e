pub mod classify;
pub mod count;
pub mod mask;
pub mod sort;

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "addrsort")]
#[command(about = "Sort, classify and aggregate IP addresses, CIDR blocks and hostnames.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Only print results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort tokens for display (reads stdin when no tokens are given)
    #[command(alias = "s")]
    Sort {
        /// Ordering to apply
        #[arg(short, long, value_enum, default_value_t = SortBy::Address)]
        by: SortBy,
        tokens: Vec<String>,
    },
    /// Print the type of each token (reads stdin when no tokens are given)
    #[command(alias = "c")]
    Classify { tokens: Vec<String> },
    /// Convert a subnet mask to a prefix length, or back with --from-prefix
    #[command(alias = "m")]
    Mask {
        #[arg(required_unless_present = "from_prefix", conflicts_with = "from_prefix")]
        mask: Option<String>,
        #[arg(short, long)]
        from_prefix: Option<u8>,
    },
    /// Sum client counters matched by IP or CIDR tokens
    #[command(alias = "n")]
    Count {
        /// IP address or CIDR block to match (repeatable)
        #[arg(short, long = "token", required = true)]
        tokens: Vec<String>,
        /// File of "address count" lines, or "-" for stdin
        #[arg(short, long)]
        counters: PathBuf,
        /// List the matched clients before the total
        #[arg(short, long)]
        breakdown: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    /// IP addresses and CIDR blocks only, malformed entries stay in place
    Ip,
    /// Addresses first, then hostnames alphabetically
    Address,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Returns `tokens`, or the non-empty lines of stdin when no tokens were passed.
pub fn tokens_or_stdin(tokens: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !tokens.is_empty() {
        return Ok(tokens);
    }
    read_tokens(std::io::stdin().lock())
}

fn read_tokens(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read tokens from stdin")?;
        let token = line.trim();
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
    }
    Ok(tokens)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
