use addrsort_core::{bit_mask_to_subnet_mask, subnet_mask_to_bit_mask};
use anyhow::Context;

use crate::config::Config;
use crate::terminal::print;

pub fn mask(mask: Option<String>, from_prefix: Option<u8>, cfg: &Config) -> anyhow::Result<()> {
    print::header("subnet mask", cfg);

    match (mask, from_prefix) {
        (_, Some(prefix_len)) => {
            let mask = bit_mask_to_subnet_mask(prefix_len)
                .with_context(|| format!("Cannot build a subnet mask for /{prefix_len}"))?;
            print::result(&mask.to_string());
        }
        (Some(mask), None) => {
            let prefix_len = subnet_mask_to_bit_mask(&mask)
                .with_context(|| format!("Cannot convert '{mask}' to a prefix length"))?;
            print::result(&prefix_len.to_string());
        }
        (None, None) => anyhow::bail!("Either a subnet mask or --from-prefix is required"),
    }

    Ok(())
}
