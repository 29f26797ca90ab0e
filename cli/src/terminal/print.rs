use colored::*;

use crate::config::Config;
use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Prints a result line to stdout. Results are printed even in quiet mode.
pub fn result(msg: &str) {
    println!("{msg}");
}

/// Prints a tab separated result pair to stdout.
pub fn key_value<V: std::fmt::Display>(key: &str, value: V) {
    println!("{key}\t{value}");
}

pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    eprintln!("{}", line);
}

pub fn print_status<T: AsRef<str>>(msg: T, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    eprintln!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
}
