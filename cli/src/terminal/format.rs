use addrsort_core::AddressType;
use colored::*;

use crate::terminal::colors;

pub fn address_type(address_type: AddressType) -> ColoredString {
    let color: Color = match address_type {
        AddressType::Ip => colors::IP_ADDR,
        AddressType::Cidr => colors::CIDR_BLOCK,
        AddressType::Unknown => colors::UNKNOWN,
    };
    address_type.as_str().color(color)
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    let unit: &str = if count == 1 { singular } else { plural };
    format!("{} {unit}", count.to_string().color(colors::ACCENT).bold())
}
