//! Named IPv4 subnets and the hosts registered in them.

use super::address::{network_of, Address};
use super::mask::Mask;
use super::octets::OctetCodec;
use crate::error::Ipv4Error;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Serializable view of a [`Subnet`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSummary {
    pub name: String,
    pub description: Option<String>,
    pub net_address: String,
    pub net_mask: String,
    pub net_mask_cidr: u8,
    pub broadcast_address: String,
    pub hosts: Vec<String>,
}

/// A network block. The stored address is always the network address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    address: Address,
    mask: Mask,
    name: String,
    description: Option<String>,
    hosts: BTreeMap<u32, Address>,
}

impl Subnet {
    /// Create a subnet from `"addr/cidr"`. Host bits are cleared.
    pub fn new(network: &str, name: &str) -> Result<Subnet, Ipv4Error> {
        Subnet::from_address(Address::new(network)?, name)
    }

    /// Create a subnet from an address plus a separate mask.
    pub fn with_mask<M>(network: &str, mask: M, name: &str) -> Result<Subnet, Ipv4Error>
    where
        M: TryInto<Mask, Error = Ipv4Error>,
    {
        Subnet::from_address(Address::with_mask(network, mask)?, name)
    }

    pub fn from_address(address: Address, name: &str) -> Result<Subnet, Ipv4Error> {
        let mask = address.mask().ok_or_else(|| {
            Ipv4Error::format(&address.to_string(), "subnet address has no mask set")
        })?;
        Ok(Subnet {
            address: network_of(&address, &mask),
            mask,
            name: name.to_string(),
            description: None,
            hosts: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = Some(description.to_string());
    }

    /// Network address, without mask.
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Change the mask and recompute the network address.
    ///
    /// Registered hosts outside the new block are dropped.
    pub fn set_mask<M>(&mut self, mask: M) -> Result<(), Ipv4Error>
    where
        M: TryInto<Mask, Error = Ipv4Error>,
    {
        let mask = mask.try_into()?;
        self.address = network_of(&self.address, &mask);
        self.mask = mask;

        let before = self.hosts.len();
        let hosts = std::mem::take(&mut self.hosts);
        for host in hosts.into_values() {
            self.add_host(host);
        }
        if self.hosts.len() != before {
            log::info!(
                "{self}: {} host(s) dropped after mask change",
                before - self.hosts.len()
            );
        }
        Ok(())
    }

    pub fn broadcast(&self) -> Address {
        Address::from(self.address.to_integer() | !self.mask.to_integer())
    }

    pub fn contains(&self, ip: &Address) -> bool {
        let mask = self.mask.to_integer();
        (ip.to_integer() & mask) == (self.address.to_integer() & mask)
    }

    /// Usable host addresses: everything between network and broadcast.
    pub fn hosts(&self) -> impl Iterator<Item = Address> {
        let start = self.address.to_integer() as u64 + 1;
        let end = self.broadcast().to_integer() as u64;
        (start..end).map(|ip| Address::from(ip as u32))
    }

    /// Usable host addresses as `"ip/cidr"` strings.
    pub fn list_addresses(&self) -> Vec<String> {
        let cidr = self.mask.cidr();
        self.hosts().map(|ip| format!("{ip}/{cidr}")).collect()
    }

    /// Register a host. Returns false when it is outside the block or is
    /// the network or broadcast address.
    pub fn add_host(&mut self, host: Address) -> bool {
        let value = host.to_integer();
        if !self.contains(&host)
            || value == self.address.to_integer()
            || value == self.broadcast().to_integer()
        {
            log::debug!("{host} rejected as host of {self}");
            return false;
        }
        self.hosts.insert(value, host);
        true
    }

    /// Registered hosts in address order.
    pub fn host_list(&self) -> Vec<&Address> {
        self.hosts.values().collect()
    }

    pub fn summary(&self) -> SubnetSummary {
        SubnetSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            net_address: self.address.to_string(),
            net_mask: self.mask.to_string(),
            net_mask_cidr: self.mask.cidr(),
            broadcast_address: self.broadcast().to_string(),
            hosts: self.hosts.values().map(|h| h.to_string()).collect(),
        }
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.mask.cidr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalises_address() {
        let subnet = Subnet::new("192.168.1.77/24", "lan").unwrap();
        assert_eq!(subnet.address().to_string(), "192.168.1.0");
        assert_eq!(subnet.to_string(), "192.168.1.0/24");
        assert_eq!(subnet.name(), "lan");
        assert_eq!(subnet.description(), None);
    }

    #[test]
    fn test_new_requires_mask() {
        assert!(matches!(
            Subnet::new("192.168.1.0", "lan"),
            Err(Ipv4Error::Format { .. })
        ));
        let subnet = Subnet::with_mask("10.20.0.0", "255.255.0.0", "dc").unwrap();
        assert_eq!(subnet.to_string(), "10.20.0.0/16");
    }

    #[test]
    fn test_broadcast_and_contains() {
        let subnet = Subnet::new("10.1.1.0/28", "tiny").unwrap();
        assert_eq!(subnet.broadcast().to_string(), "10.1.1.15");
        assert!(subnet.contains(&Address::new("10.1.1.9").unwrap()));
        assert!(!subnet.contains(&Address::new("10.1.1.16").unwrap()));
    }

    #[test]
    fn test_hosts_range() {
        let subnet = Subnet::new("10.1.1.0/29", "tiny").unwrap();
        assert_eq!(
            subnet.list_addresses(),
            vec![
                "10.1.1.1/29",
                "10.1.1.2/29",
                "10.1.1.3/29",
                "10.1.1.4/29",
                "10.1.1.5/29",
                "10.1.1.6/29"
            ]
        );
        assert_eq!(Subnet::new("10.1.1.1/32", "one").unwrap().hosts().count(), 0);
        assert_eq!(
            Subnet::new("255.255.255.255/32", "edge").unwrap().hosts().count(),
            0
        );
    }

    #[test]
    fn test_add_host() {
        let mut subnet = Subnet::new("172.16.0.0/24", "servers").unwrap();
        assert!(subnet.add_host(Address::new("172.16.0.20").unwrap()));
        assert!(subnet.add_host(Address::new("172.16.0.10").unwrap()));
        assert!(!subnet.add_host(Address::new("172.16.0.0").unwrap()));
        assert!(!subnet.add_host(Address::new("172.16.0.255").unwrap()));
        assert!(!subnet.add_host(Address::new("172.16.1.10").unwrap()));
        let hosts: Vec<String> = subnet.host_list().iter().map(|h| h.to_string()).collect();
        assert_eq!(hosts, vec!["172.16.0.10", "172.16.0.20"]);
    }

    #[test]
    fn test_set_mask() {
        let mut subnet = Subnet::new("172.16.0.0/24", "servers").unwrap();
        subnet.add_host(Address::new("172.16.0.10").unwrap());
        subnet.add_host(Address::new("172.16.0.200").unwrap());
        subnet.set_mask(25u8).unwrap();
        assert_eq!(subnet.to_string(), "172.16.0.0/25");
        assert_eq!(subnet.host_list().len(), 1);
        assert_eq!(subnet.set_mask(0u8), Err(Ipv4Error::Range(0)));
        assert_eq!(subnet.mask().cidr(), 25);
    }

    #[test]
    fn test_summary() {
        let mut subnet = Subnet::new("10.0.0.0/30", "p2p").unwrap();
        subnet.set_description("uplink");
        subnet.add_host(Address::new("10.0.0.1").unwrap());
        let summary = subnet.summary();
        assert_eq!(summary.net_mask, "255.255.255.252");
        assert_eq!(summary.net_mask_cidr, 30);
        assert_eq!(summary.broadcast_address, "10.0.0.3");
        assert_eq!(summary.hosts, vec!["10.0.0.1"]);
        assert_eq!(summary.description.as_deref(), Some("uplink"));
    }
}
