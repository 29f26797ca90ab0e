//! Conversion between dotted-decimal subnet masks and prefix lengths.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::AddressError;

/// Counts the leading one-bits of a dotted-decimal subnet mask (e.g., "255.255.255.0" -> 24).
///
/// Masks with a one-bit after the first zero-bit (e.g., "255.0.255.0") are rejected
/// instead of being read as a partial count.
pub fn subnet_mask_to_bit_mask(mask: &str) -> Result<u8, AddressError> {
    let mask_addr = mask
        .parse::<Ipv4Addr>()
        .map_err(|_| AddressError::parse(mask))?;

    let bits: u32 = u32::from(mask_addr);
    let prefix: u32 = bits.leading_ones();

    if bits.count_ones() != prefix {
        return Err(AddressError::InvalidMask {
            mask: mask.to_string(),
        });
    }

    Ok(prefix as u8)
}

/// Builds the canonical subnet mask for a prefix length (e.g., 20 -> "255.255.240.0").
pub fn bit_mask_to_subnet_mask(prefix_len: u8) -> Result<Ipv4Addr, AddressError> {
    let network = Ipv4Network::new(Ipv4Addr::UNSPECIFIED, prefix_len).map_err(|_| {
        AddressError::PrefixOutOfRange {
            token: prefix_len.to_string(),
            max: 32,
        }
    })?;

    Ok(network.mask())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
