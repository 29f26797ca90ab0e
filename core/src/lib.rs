//! # addrsort-core
//!
//! Classification, display ordering and counter aggregation for lists of address tokens.
//!
//! ## Modules
//! * **[`address`]**: Parses tokens into [`ParsedAddress`] values and classifies them as
//!   [`AddressType::Ip`], [`AddressType::Cidr`] or [`AddressType::Unknown`].
//! * **[`mask`]**: Converts dotted-decimal subnet masks to prefix lengths and back.
//! * **[`ordering`]**: Comparators and pure sorting helpers. `compare_ip` is only a total
//!   order over valid addresses, so lists that may hold unparsable tokens are sorted with
//!   [`sort_ips`], never `sort_by(compare_ip)`.
//! * **[`statistics`]**: Sums per-client counters against IP and CIDR tokens.
//!
//! ## Diagnostics
//! The crate only emits `tracing` events. Installing a subscriber is left to the caller.
//!
//! ```
//! use addrsort_core::{compare_address, count_clients_statistics};
//! use std::collections::HashMap;
//!
//! let mut hosts = vec!["fritz.box", "10.0.0.2", "10.0.0.0/8"];
//! hosts.sort_by(|a, b| compare_address(a, b));
//! assert_eq!(hosts, ["10.0.0.0/8", "10.0.0.2", "fritz.box"]);
//!
//! let counters = HashMap::from([("10.0.0.2".to_string(), 3), ("10.0.0.3".to_string(), 4)]);
//! assert_eq!(count_clients_statistics(&["10.0.0.0/8"], &counters), 7);
//! ```

pub mod address;
pub mod error;
pub mod mask;
pub mod ordering;
pub mod statistics;

pub use address::{AddressType, Family, ParsedAddress, find_address_type, parse};
pub use error::AddressError;
pub use mask::{bit_mask_to_subnet_mask, subnet_mask_to_bit_mask};
pub use ordering::{compare_address, compare_ip, sort_addresses, sort_ips};
pub use statistics::{count_clients_statistics, matching_clients};
