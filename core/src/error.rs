use thiserror::Error;

/// Failures produced while interpreting a raw token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The token matches neither the IPv4, IPv6 nor CIDR grammar.
    #[error("'{token}' is not an IP address or CIDR network")]
    Parse { token: String },

    /// The CIDR prefix is outside the range allowed for the address family.
    #[error("prefix length in '{token}' must be between 0 and {max}")]
    PrefixOutOfRange { token: String, max: u8 },

    /// The subnet mask has a one-bit after its first zero-bit.
    #[error("'{mask}' is not a contiguous subnet mask")]
    InvalidMask { mask: String },
}

impl AddressError {
    pub(crate) fn parse(token: &str) -> Self {
        Self::Parse {
            token: token.to_string(),
        }
    }
}
