//! # Client Statistics
//!
//! Sums per-client counters for a list of tokens that may hold single IPs or CIDR blocks.
//!
//! The counter map drives the iteration, so a client covered by several tokens
//! (e.g., `10.0.0.1` and `10.0.0.0/8`) is still counted once.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::address::{self, ParsedAddress};

/// The set of tokens a client is checked against.
///
/// Single addresses are looked up in a set, CIDR blocks are scanned.
struct ClientMatcher {
    hosts: HashSet<ParsedAddress>,
    networks: Vec<ParsedAddress>,
}

impl ClientMatcher {
    fn new<T: AsRef<str>>(tokens: &[T]) -> Self {
        let mut hosts = HashSet::new();
        let mut networks = Vec::new();

        // MAC addresses and other non-IP tokens cannot match a client.
        for parsed in tokens.iter().filter_map(|token| address::parse(token.as_ref()).ok()) {
            if parsed.is_cidr() {
                networks.push(parsed);
            } else {
                hosts.insert(parsed);
            }
        }

        Self { hosts, networks }
    }

    fn is_empty(&self) -> bool {
        self.hosts.is_empty() && self.networks.is_empty()
    }

    fn matches(&self, client: &ParsedAddress) -> bool {
        self.hosts.contains(client) || self.networks.iter().any(|network| network.contains(client))
    }
}

/// Sums the counters of every client matched by at least one token.
///
/// Tokens that are neither IPs nor CIDR blocks are ignored.
pub fn count_clients_statistics<T, K>(tokens: &[T], counters: &HashMap<K, u64>) -> u64
where
    T: AsRef<str>,
    K: AsRef<str>,
{
    let matcher = ClientMatcher::new(tokens);
    if matcher.is_empty() {
        return 0;
    }

    counters
        .iter()
        .filter(|(client, _)| {
            parse_client(client.as_ref()).is_some_and(|client| matcher.matches(&client))
        })
        .fold(0u64, |total, (_, count)| total.saturating_add(*count))
}

/// Returns the matched counter entries in [`crate::compare_ip`] order of their keys.
///
/// The counts add up to [`count_clients_statistics`] for the same input.
pub fn matching_clients<'a, T, K>(tokens: &[T], counters: &'a HashMap<K, u64>) -> Vec<(&'a K, u64)>
where
    T: AsRef<str>,
    K: AsRef<str>,
{
    let matcher = ClientMatcher::new(tokens);

    let mut matched: Vec<(&K, ParsedAddress, u64)> = counters
        .iter()
        .filter_map(|(key, count)| {
            let client = parse_client(key.as_ref())?;
            matcher.matches(&client).then_some((key, client, *count))
        })
        .collect();
    matched.sort_by(|(_, left, _), (_, right, _)| left.cmp(right));

    matched.into_iter().map(|(key, _, count)| (key, count)).collect()
}

fn parse_client(key: &str) -> Option<ParsedAddress> {
    match address::parse(key) {
        Ok(client) if !client.is_cidr() => Some(client),
        _ => {
            debug!(client = key, "Skipping counter entry that is not a single IP address");
            None
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
