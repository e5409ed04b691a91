//! Error types for address and mask handling.

use thiserror::Error;

/// Errors raised while parsing or manipulating IPv4 values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    /// Malformed address or network string.
    #[error("Invalid IPv4 format {raw:?}: {reason}")]
    Format { raw: String, reason: String },
    /// CIDR prefix length outside 1..=32.
    #[error("Mask CIDR value must be between 1 and 32, got {0}")]
    Range(u32),
    /// Dotted mask that is not a contiguous run of 1-bits.
    #[error("Invalid mask provided: {0}")]
    InvalidMask(String),
    /// Port number absent from the open ports.
    #[error("Port {0} is not in the list of open ports")]
    NotFound(u16),
}

impl Ipv4Error {
    pub(crate) fn format(raw: &str, reason: impl Into<String>) -> Self {
        Ipv4Error::Format {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}
