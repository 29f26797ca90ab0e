use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use addrsort_core::{
    AddressType, count_clients_statistics, find_address_type, matching_clients, parse,
};
use anyhow::Context;
use colored::*;
use tracing::{info, warn};

use crate::config::Config;
use crate::terminal::{colors, format, print};

pub fn count(
    tokens: Vec<String>,
    counters_path: &Path,
    breakdown: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let counters: HashMap<String, u64> = load_counters(counters_path)?;
    info!("Loaded {} client counters", counters.len());

    for token in &tokens {
        if find_address_type(token) == AddressType::Unknown {
            warn!(
                token = token.as_str(),
                "Not an IP address or CIDR block, it will not match any client"
            );
        }
    }

    print::header("client statistics", cfg);

    if breakdown {
        for network in describe_networks(&tokens) {
            print::print_status(network, cfg);
        }

        let matched = matching_clients(&tokens, &counters);
        for (client, hits) in &matched {
            print::key_value(client, hits.to_string().color(colors::ACCENT));
        }
        print::print_status(
            format!("{} matched", format::plural(matched.len(), "client", "clients")),
            cfg,
        );
    }

    let total: u64 = count_clients_statistics(&tokens, &counters);
    print::result(&total.to_string());

    Ok(())
}

/// Describes the network behind every CIDR token, e.g.
/// `10.1.2.3/8 covers 10.0.0.0 mask 255.0.0.0`.
fn describe_networks(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|token| {
            let network = parse(token).ok()?.to_network()?;
            Some(format!(
                "{token} covers {} mask {}",
                network.network(),
                network.mask()
            ))
        })
        .collect()
}

fn load_counters(path: &Path) -> anyhow::Result<HashMap<String, u64>> {
    if path == Path::new("-") {
        return parse_counters(std::io::stdin().lock());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open counters file '{}'", path.display()))?;
    parse_counters(BufReader::new(file))
        .with_context(|| format!("Failed to read counters file '{}'", path.display()))
}

/// Parses `<address> <count>` lines. Blank lines and `#` comments are skipped.
///
/// Repeated addresses have their counts added up.
fn parse_counters(reader: impl BufRead) -> anyhow::Result<HashMap<String, u64>> {
    let mut counters: HashMap<String, u64> = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no: usize = idx + 1;
        let line: String = line.with_context(|| format!("Failed to read line {line_no}"))?;
        let content: &str = line.split_once('#').map_or(line.as_str(), |(before, _)| before);

        let mut fields = content.split_whitespace();
        let (client, hits) = match (fields.next(), fields.next(), fields.next()) {
            (None, _, _) => continue,
            (Some(client), Some(hits), None) => (client, hits),
            _ => anyhow::bail!(
                "Line {line_no}: expected '<address> <count>', got '{}'",
                content.trim()
            ),
        };

        let hits: u64 = hits
            .parse()
            .with_context(|| format!("Line {line_no}: invalid count '{hits}'"))?;

        let entry: &mut u64 = counters.entry(client.to_string()).or_insert(0);
        *entry = entry.saturating_add(hits);
    }

    Ok(counters)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
