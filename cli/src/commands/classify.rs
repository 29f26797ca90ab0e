use addrsort_core::{AddressType, find_address_type};

use crate::commands::tokens_or_stdin;
use crate::config::Config;
use crate::terminal::{format, print};

pub fn classify(tokens: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    let tokens: Vec<String> = tokens_or_stdin(tokens)?;

    print::header("address types", cfg);

    let mut unknown: usize = 0;
    for token in &tokens {
        let address_type: AddressType = find_address_type(token);
        if address_type == AddressType::Unknown {
            unknown += 1;
        }
        print::key_value(token, format::address_type(address_type));
    }

    print::print_status(
        format!(
            "{} classified, {} not an IP address or CIDR block",
            format::plural(tokens.len(), "token", "tokens"),
            format::plural(unknown, "is", "are")
        ),
        cfg,
    );

    Ok(())
}
