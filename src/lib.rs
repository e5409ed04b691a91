//! IPv4 address, mask and subnet value types for inventory tooling.
//!
//! - [`models`] - addresses, masks, ports and subnets
//! - [`output`] - text and JSON reports
//! - [`config`] - environment-driven settings for the binary

pub mod config;
pub mod error;
pub mod models;
pub mod output;

use config::{Config, OutputFormat};
use std::error::Error;

pub use error::Ipv4Error;
pub use models::{Address, Mask, OctetCodec, Octets, Port, Subnet};

/// Parse every input and render it in the configured format.
///
/// Text reports are separated by an empty line; JSON reports are one
/// pretty-printed document each.
pub fn inspect_addresses<S: AsRef<str>>(
    inputs: &[S],
    config: &Config,
) -> Result<Vec<String>, Box<dyn Error>> {
    log::info!("Inspecting {} address(es)", inputs.len());
    let mut out = Vec::new();

    for input in inputs {
        let input = input.as_ref().trim();
        let address = Address::new(input).map_err(|e| format!("Error parsing {input}: {e}"))?;
        log::debug!("parsed {input} as {address}");

        match config.format {
            OutputFormat::Text => {
                if !out.is_empty() {
                    out.push(String::new());
                }
                out.extend(output::address_report(&address, config)?);
            }
            OutputFormat::Json => out.push(output::address_json(&address)?),
        }
    }

    Ok(out)
}
