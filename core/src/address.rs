//! # Address Model
//!
//! Classifies raw tokens and decomposes them into a numeric form.
//!
//! A token can be:
//! * A single IPv4 address (e.g., `192.168.1.5`).
//! * A single IPv6 address, expanded or compressed (e.g., `2001:db8:0:0:0:0:0:1`, `2001:db8::1`).
//! * A CIDR block of either family (e.g., `192.168.1.0/24`, `2001:db8::/32`).
//! * Anything else (hostnames, MAC addresses, typos), which is reported as [`AddressType::Unknown`].

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::AddressError;

/// The semantic type of a raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// A plain IPv4 or IPv6 address.
    Ip,
    /// An address followed by a prefix length.
    Cidr,
    /// Hostnames, MAC addresses and everything that fails to parse.
    Unknown,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Ip => "ip",
            AddressType::Cidr => "cidr",
            AddressType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address family. IPv4 orders before IPv6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    IPv4,
    IPv6,
}

impl Family {
    fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Family::IPv4,
            IpAddr::V6(_) => Family::IPv6,
        }
    }

    /// Number of bits in an address of this family.
    pub fn bit_width(&self) -> u8 {
        match self {
            Family::IPv4 => 32,
            Family::IPv6 => 128,
        }
    }

    fn all_ones(&self) -> u128 {
        match self {
            Family::IPv4 => u128::from(u32::MAX),
            Family::IPv6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::IPv4 => f.write_str("IPv4"),
            Family::IPv6 => f.write_str("IPv6"),
        }
    }
}

/// A successfully parsed IP address or CIDR network.
///
/// `value` is the full address exactly as written, host bits included.
/// `192.168.0.1/8` keeps `192.168.0.1`, not `192.0.0.0`.
///
/// Values are only built by [`parse`], so an IPv4 value always fits in 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedAddress {
    pub(crate) family: Family,
    pub(crate) value: u128,
    pub(crate) prefix_len: Option<u8>,
}

impl ParsedAddress {
    pub fn family(&self) -> Family {
        self.family
    }

    /// The address as an unsigned integer of the family's width, host bits included.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// The prefix length of a CIDR entry, `None` for a plain address.
    pub fn prefix_len(&self) -> Option<u8> {
        self.prefix_len
    }

    pub fn is_cidr(&self) -> bool {
        self.prefix_len.is_some()
    }

    pub fn address(&self) -> IpAddr {
        match self.family {
            // Lossless, see the construction invariant above.
            Family::IPv4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            Family::IPv6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }

    /// The network mask as an integer of the family's width.
    ///
    /// A plain address behaves like a full-length prefix.
    pub fn netmask(&self) -> u128 {
        let width = self.family.bit_width();
        let prefix = self.prefix_len.unwrap_or(width);
        if prefix == 0 {
            return 0;
        }
        (u128::MAX << (width - prefix)) & self.family.all_ones()
    }

    pub fn network_value(&self) -> u128 {
        self.value & self.netmask()
    }

    /// Returns `true` if `other` lies inside this address' network.
    ///
    /// Only the address of `other` is considered, its own prefix is ignored.
    pub fn contains(&self, other: &ParsedAddress) -> bool {
        if self.family != other.family {
            return false;
        }
        let mask = self.netmask();
        other.value & mask == self.value & mask
    }

    /// Converts a CIDR entry into a [`IpNetwork`]. Plain addresses yield `None`.
    pub fn to_network(&self) -> Option<IpNetwork> {
        let prefix = self.prefix_len?;
        IpNetwork::new(self.address(), prefix).ok()
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix_len {
            Some(prefix) => write!(f, "{}/{}", self.address(), prefix),
            None => write!(f, "{}", self.address()),
        }
    }
}

impl FromStr for ParsedAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a token as an IP address or a CIDR network.
///
/// Supported formats:
/// * **IPv4**: exactly four decimal octets (e.g., "10.0.0.1").
/// * **IPv6**: eight hex groups, or fewer with a single `::` (e.g., "fe80::1").
/// * **CIDR**: "Address/Prefix" with a decimal prefix of at most 32 (IPv4) or 128 (IPv6).
pub fn parse(token: &str) -> Result<ParsedAddress, AddressError> {
    let (addr_str, prefix_str) = match token.split_once('/') {
        Some((addr_str, prefix_str)) => (addr_str, Some(prefix_str)),
        None => (token, None),
    };

    let ip = addr_str
        .parse::<IpAddr>()
        .map_err(|_| AddressError::parse(token))?;

    let prefix_len = prefix_str
        .map(|prefix_str| parse_prefix(token, ip, prefix_str))
        .transpose()?;

    Ok(ParsedAddress {
        family: Family::of(&ip),
        value: ip_to_value(ip),
        prefix_len,
    })
}

/// Returns the semantic type of a token without exposing parse errors.
pub fn find_address_type(token: &str) -> AddressType {
    match parse(token) {
        Ok(parsed) if parsed.is_cidr() => AddressType::Cidr,
        Ok(_) => AddressType::Ip,
        Err(_) => AddressType::Unknown,
    }
}

fn parse_prefix(token: &str, ip: IpAddr, prefix_str: &str) -> Result<u8, AddressError> {
    // Signs, spaces and hex are rejected outright rather than handed to `u8::from_str`.
    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::parse(token));
    }

    let out_of_range = || AddressError::PrefixOutOfRange {
        token: token.to_string(),
        max: Family::of(&ip).bit_width(),
    };

    let prefix = prefix_str.parse::<u8>().map_err(|_| out_of_range())?;
    let network = IpNetwork::new(ip, prefix).map_err(|_| out_of_range())?;

    Ok(network.prefix())
}

fn ip_to_value(ip: IpAddr) -> u128 {
    match ip {
        IpAddr::V4(ipv4_addr) => u128::from(u32::from(ipv4_addr)),
        IpAddr::V6(ipv6_addr) => u128::from(ipv6_addr),
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
