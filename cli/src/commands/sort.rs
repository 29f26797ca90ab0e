use addrsort_core::{sort_addresses, sort_ips};

use crate::commands::{SortBy, tokens_or_stdin};
use crate::config::Config;
use crate::terminal::{format, print};

pub fn sort(by: SortBy, tokens: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    let tokens: Vec<String> = tokens_or_stdin(tokens)?;

    let sorted: Vec<&str> = match by {
        SortBy::Ip => sort_ips(&tokens),
        SortBy::Address => sort_addresses(&tokens),
    };

    print::header("sorted entries", cfg);
    for token in &sorted {
        print::result(token);
    }
    print::print_status(
        format!("{} sorted", format::plural(sorted.len(), "entry", "entries")),
        cfg,
    );

    Ok(())
}
