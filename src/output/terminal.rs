//! Terminal output utilities.
//!
//! Renders an [`Address`] as labelled, coloured lines.

use crate::config::Config;
use crate::error::Ipv4Error;
use crate::models::{Address, OctetCodec};
use colored::Colorize;

const LABEL_WIDTH: usize = 9;

/// Format a right-aligned, bold label followed by its value.
///
/// # Arguments
/// * `label` - The field name
/// * `value` - The value to show after the label
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label:>width$}");
    format!("{}: {}", label.bold(), value.to_string())
}

/// Build the text report for one address.
///
/// Fails only when `config.network` is set and is not a valid `addr/cidr`.
pub fn address_report(address: &Address, config: &Config) -> Result<Vec<String>, Ipv4Error> {
    let mask = address.mask();
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    let ports = address.port_strings();
    let mut lines = vec![
        format_field("address", address.render(config.show_mask), LABEL_WIDTH),
        format_field("mask", or_dash(mask.map(|m| m.to_string())), LABEL_WIDTH),
        format_field("cidr", or_dash(mask.map(|m| m.cidr().to_string())), LABEL_WIDTH),
        format_field(
            "wildcard",
            or_dash(mask.map(|m| m.wildcard().to_string())),
            LABEL_WIDTH,
        ),
        format_field("hex", address.to_hex_string(), LABEL_WIDTH),
        format_field("binary", address.to_binary_array().join("."), LABEL_WIDTH),
        format_field("integer", address.to_integer(), LABEL_WIDTH),
        format_field(
            "ports",
            if ports.is_empty() {
                "-".to_string()
            } else {
                ports.join(", ")
            },
            LABEL_WIDTH,
        ),
    ];

    if let Some(network) = &config.network {
        let verdict = if address.is_in_subnet(network)? {
            "yes".green()
        } else {
            "no".red()
        };
        lines.push(format_field(&format!("in {network}"), verdict, LABEL_WIDTH));
    }

    Ok(lines)
}
