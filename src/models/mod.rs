//! Value types for IPv4 inventory data.
//!
//! This module contains the core data structures:
//! - [`Octets`] and [`OctetCodec`] - dotted-decimal parsing and hex/binary/integer forms
//! - [`Mask`] - legal subnet masks and CIDR conversion
//! - [`Address`] - an address with optional mask and open ports
//! - [`Port`] and [`ServicePort`] - ports attached to an address
//! - [`Subnet`] - a named network block and its hosts

mod address;
mod mask;
mod octets;
mod port;
mod subnet;

// Re-export public types
pub use address::{Address, AddressSummary, OpenPort};
pub use mask::{Mask, MAX_LENGTH, MIN_LENGTH};
pub use octets::{OctetCodec, Octets, OCTET_COUNT};
pub use port::{Port, PortState, ServicePort};
pub use subnet::{Subnet, SubnetSummary};
