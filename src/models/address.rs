//! IPv4 host and network addresses.
//!
//! Provides [`Address`], a parsed IPv4 address with an optional [`Mask`] and
//! the set of open ports found on it.

use super::mask::Mask;
use super::octets::{OctetCodec, Octets};
use super::port::ServicePort;
use crate::error::Ipv4Error;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Split `"addr/cidr"` on the first `/`, building the mask from the suffix.
pub(crate) fn split_cidr(text: &str) -> Result<(&str, Option<Mask>), Ipv4Error> {
    let Some((addr, prefix)) = text.split_once('/') else {
        return Ok((text, None));
    };

    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Ipv4Error::format(
            text,
            format!("prefix {prefix:?} is not a number"),
        ));
    }
    // All digits, so a parse failure can only be overflow.
    let cidr: u32 = prefix.parse().map_err(|_| Ipv4Error::Range(u32::MAX))?;
    let cidr = u8::try_from(cidr).map_err(|_| Ipv4Error::Range(cidr))?;
    Ok((addr, Some(Mask::from_cidr(cidr)?)))
}

/// Network address of `address` under `mask` (host bits cleared, no mask).
pub(crate) fn network_of(address: &Address, mask: &Mask) -> Address {
    Address::from(address.to_integer() & mask.to_integer())
}

/// A port recorded on an address: its number plus how it was displayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpenPort {
    pub number: u16,
    pub label: String,
}

/// Flat, serializable view of an [`Address`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressSummary {
    pub address: String,
    pub mask: Option<String>,
    pub cidr: Option<u8>,
    pub hex: String,
    pub binary: Vec<String>,
    pub integer: u32,
    pub ports: Vec<OpenPort>,
}

/// IPv4 address with an optional mask and open ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    octets: Octets,
    mask: Option<Mask>,
    ports: Vec<OpenPort>,
}

impl Address {
    /// Parse `"10.0.0.1"` or `"10.0.0.1/24"`.
    pub fn new(address: &str) -> Result<Address, Ipv4Error> {
        let (addr, mask) = split_cidr(address)?;
        Ok(Address {
            octets: Octets::parse(addr)?,
            mask,
            ports: Vec::new(),
        })
    }

    /// Parse an address and attach `mask` (a CIDR `u8` or a dotted string).
    ///
    /// A `/cidr` suffix in `address` takes precedence over `mask`.
    pub fn with_mask<M>(address: &str, mask: M) -> Result<Address, Ipv4Error>
    where
        M: TryInto<Mask, Error = Ipv4Error>,
    {
        let mut parsed = Address::new(address)?;
        if parsed.mask.is_none() {
            parsed.mask = Some(mask.try_into()?);
        }
        Ok(parsed)
    }

    pub fn from_octets(octets: Octets) -> Address {
        Address {
            octets,
            mask: None,
            ports: Vec::new(),
        }
    }

    pub fn mask(&self) -> Option<Mask> {
        self.mask
    }

    /// Network address under this address's own mask, keeping the mask.
    ///
    /// `None` when no mask is set.
    pub fn network(&self) -> Option<Address> {
        let mask = self.mask?;
        let mut network = network_of(self, &mask);
        network.mask = Some(mask);
        Some(network)
    }

    /// Replace the mask; on error the current mask is kept.
    pub fn set_mask<M>(&mut self, mask: M) -> Result<(), Ipv4Error>
    where
        M: TryInto<Mask, Error = Ipv4Error>,
    {
        let mask = mask.try_into()?;
        log::debug!("{}: mask set to /{}", self.octets, mask.cidr());
        self.mask = Some(mask);
        Ok(())
    }

    /// Port numbers in insertion order.
    pub fn ports(&self) -> Vec<u16> {
        self.ports.iter().map(|p| p.number).collect()
    }

    pub fn port_strings(&self) -> Vec<String> {
        self.ports.iter().map(|p| p.label.clone()).collect()
    }

    pub fn has_port(&self, number: u16) -> bool {
        self.ports.iter().any(|p| p.number == number)
    }

    /// Record an open port. A port number already present is left alone.
    pub fn add_port<P: ServicePort>(&mut self, port: P) {
        if self.has_port(port.number()) {
            log::warn!("{port} is already in the list of open ports of {}", self.octets);
            return;
        }
        self.ports.push(OpenPort {
            number: port.number(),
            label: port.label(),
        });
    }

    /// Replace all open ports.
    pub fn set_ports<P, I>(&mut self, ports: I)
    where
        P: ServicePort,
        I: IntoIterator<Item = P>,
    {
        self.ports.clear();
        for port in ports {
            self.add_port(port);
        }
    }

    pub fn clear_ports(&mut self) {
        self.ports.clear();
    }

    pub fn remove_port(&mut self, number: u16) -> Result<(), Ipv4Error> {
        let index = self
            .ports
            .iter()
            .position(|p| p.number == number)
            .ok_or(Ipv4Error::NotFound(number))?;
        self.ports.remove(index);
        Ok(())
    }

    /// Check whether this address lies in `network`, which must carry a
    /// `/cidr` suffix. The network's own mask is used for the comparison.
    pub fn is_in_subnet(&self, network: &str) -> Result<bool, Ipv4Error> {
        if !network.contains('/') {
            return Err(Ipv4Error::format(
                network,
                "network must include a mask in CIDR notation",
            ));
        }
        let net = Address::new(network)?;
        let mask = net
            .mask
            .ok_or_else(|| Ipv4Error::format(network, "network has no mask"))?
            .to_integer();
        Ok((self.to_integer() & mask) == (net.to_integer() & mask))
    }

    /// `"10.0.0.1/24"`, or `"10.0.0.1"` when `show_mask` is false or no mask is set.
    pub fn render(&self, show_mask: bool) -> String {
        match self.mask {
            Some(mask) if show_mask => format!("{}/{}", self.octets, mask.cidr()),
            _ => self.octets.to_string(),
        }
    }

    pub fn summary(&self) -> AddressSummary {
        AddressSummary {
            address: self.render(false),
            mask: self.mask.map(|m| m.to_string()),
            cidr: self.mask.map(|m| m.cidr()),
            hex: self.to_hex_string(),
            binary: self.to_binary_array(),
            integer: self.to_integer(),
            ports: self.ports.clone(),
        }
    }
}

impl OctetCodec for Address {
    fn octets(&self) -> Octets {
        self.octets
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address::from_octets(Octets::from_integer(value))
    }
}

impl FromStr for Address {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::new(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(true))
    }
}

// Only the address and mask travel; open ports are not serialized.
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.render(true))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(s.trim()).map_err(de::Error::custom)
    }
}
