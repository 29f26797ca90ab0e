//! # Display Ordering
//!
//! Comparators for sorting lists of address tokens, plus pure sorting helpers built on them.
//!
//! Parsed entries are ordered by:
//! 1. Family: IPv4 before IPv6.
//! 2. Numeric value of the address, host bits included.
//! 3. At equal value, CIDR entries before the plain address.
//! 4. Between CIDR entries at equal value, the shorter prefix first.
//!
//! Anything still tied compares as `Equal`, so a stable sort keeps the caller's order.

use std::cmp::Ordering;

use tracing::warn;

use crate::address::{self, ParsedAddress};

impl Ord for ParsedAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.family
            .cmp(&other.family)
            .then(self.value.cmp(&other.value))
            .then_with(|| match (self.prefix_len, other.prefix_len) {
                (Some(left), Some(right)) => left.cmp(&right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

impl PartialOrd for ParsedAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares two tokens that are expected to be IP addresses or CIDR networks.
///
/// A token that fails to parse is reported with a warning and the pair compares as
/// `Equal`. That makes this a total order only over tokens that all parse: use it for
/// pairwise checks and for `slice::sort_by` on lists known to hold addresses only.
/// A list that may contain unparsable tokens must go through [`sort_ips`] instead, since
/// `slice::sort_by` may panic on an inconsistent comparator once the list is long enough
/// to leave insertion sort.
pub fn compare_ip(a: &str, b: &str) -> Ordering {
    match (parse_or_warn(a), parse_or_warn(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => Ordering::Equal,
    }
}

/// Compares two tokens that may be IP addresses, CIDR networks or hostnames.
///
/// Addresses come first in [`compare_ip`] order, everything else follows in plain
/// string order. Hostnames are expected here, so nothing is logged.
pub fn compare_address(a: &str, b: &str) -> Ordering {
    let left = address::parse(a).ok();
    let right = address::parse(b).ok();
    compare_with_fallback((a, left.as_ref()), (b, right.as_ref()))
}

/// Returns the tokens in [`compare_ip`] order without modifying the input.
///
/// Tokens that are not addresses keep their original position and are reported once each.
/// The remaining positions are filled with the addresses in stable sorted order.
pub fn sort_ips<T: AsRef<str>>(tokens: &[T]) -> Vec<&str> {
    let slots: Vec<(&str, Option<ParsedAddress>)> = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            (token, parse_or_warn(token))
        })
        .collect();

    let mut sorted: Vec<(&str, ParsedAddress)> = slots
        .iter()
        .filter_map(|(token, parsed)| parsed.map(|parsed| (*token, parsed)))
        .collect();
    sorted.sort_by(|(_, left), (_, right)| left.cmp(right));

    // One sorted entry exists for every parsed slot.
    let mut sorted = sorted.into_iter();
    slots
        .into_iter()
        .map(|(token, parsed)| match parsed {
            Some(_) => sorted.next().map_or(token, |(sorted_token, _)| sorted_token),
            None => token,
        })
        .collect()
}

/// Returns the tokens in [`compare_address`] order without modifying the input.
pub fn sort_addresses<T: AsRef<str>>(tokens: &[T]) -> Vec<&str> {
    let mut keyed: Vec<(&str, Option<ParsedAddress>)> = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            (token, address::parse(token).ok())
        })
        .collect();

    keyed.sort_by(|(a, left), (b, right)| {
        compare_with_fallback((*a, left.as_ref()), (*b, right.as_ref()))
    });

    keyed.into_iter().map(|(token, _)| token).collect()
}

fn compare_with_fallback(
    (a, left): (&str, Option<&ParsedAddress>),
    (b, right): (&str, Option<&ParsedAddress>),
) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn parse_or_warn(token: &str) -> Option<ParsedAddress> {
    match address::parse(token) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(token, "Cannot order entry by address: {e}");
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
