//! IPv4 subnet masks.
//!
//! Provides [`Mask`], a legal dotted-decimal netmask paired with its CIDR
//! prefix length, along with helpers converting between the two forms.

use super::octets::{OctetCodec, Octets};
use crate::error::Ipv4Error;
use lazy_static::lazy_static;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Shortest accepted prefix length.
pub const MIN_LENGTH: u8 = 1;
/// Longest accepted prefix length (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // One dotted mask per prefix length, ascending.
    static ref LEGAL_MASKS: Vec<String> = (MIN_LENGTH..=MAX_LENGTH)
        .map(|len| Octets::from_integer(mask_bits(len)).to_string())
        .collect();
}

// Caller guarantees len <= 32.
const fn mask_bits(len: u8) -> u32 {
    let right_len = (MAX_LENGTH - len) as u32;
    ((0xFFFF_FFFFu64 << right_len) & 0xFFFF_FFFF) as u32
}

fn check_cidr(cidr: u32) -> Result<u8, Ipv4Error> {
    if (MIN_LENGTH as u32..=MAX_LENGTH as u32).contains(&cidr) {
        Ok(cidr as u8)
    } else {
        Err(Ipv4Error::Range(cidr))
    }
}

/// Subnet mask with a prefix length in 1..=32.
///
/// A `Mask` is always legal: a run of leading 1-bits followed by 0-bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mask {
    octets: Octets,
    cidr: u8,
}

impl Mask {
    /// Create a mask from a prefix length, e.g. `24` for `255.255.255.0`.
    pub fn from_cidr(cidr: u8) -> Result<Mask, Ipv4Error> {
        let cidr = check_cidr(cidr as u32)?;
        Ok(Mask {
            octets: Octets::from_integer(mask_bits(cidr)),
            cidr,
        })
    }

    /// Create a mask from its dotted-decimal form, e.g. `"255.255.240.0"`.
    pub fn from_dotted(mask: &str) -> Result<Mask, Ipv4Error> {
        let octets = Octets::parse(mask)?;
        let canonical = octets.to_string();
        if !LEGAL_MASKS.iter().any(|legal| *legal == canonical) {
            return Err(Ipv4Error::InvalidMask(mask.to_string()));
        }
        Ok(Mask {
            octets,
            cidr: octets.to_integer().count_ones() as u8,
        })
    }

    pub fn cidr(&self) -> u8 {
        self.cidr
    }

    /// Host part of the mask (`0.0.0.255` for a /24).
    pub fn wildcard(&self) -> Octets {
        Octets::from_integer(!self.to_integer())
    }

    /// Integer with `cidr` leading 1-bits.
    pub fn cidr_to_integer(cidr: u8) -> Result<u32, Ipv4Error> {
        Ok(mask_bits(check_cidr(cidr as u32)?))
    }

    /// Dotted-decimal mask for the given network length.
    ///
    /// # Examples
    /// ```
    /// use ipv4_inventory::models::Mask;
    /// assert_eq!(Mask::netmask(20).unwrap(), "255.255.240.0");
    /// ```
    pub fn netmask(network_length: u8) -> Result<String, Ipv4Error> {
        let bits = Mask::cidr_to_integer(network_length)?;
        Ok(Octets::from_integer(bits).to_string())
    }

    /// Prefix length of a dotted mask, rejecting illegal masks.
    pub fn netcidr(mask: &str) -> Result<u8, Ipv4Error> {
        Mask::from_dotted(mask).map(|m| m.cidr)
    }

    /// All 32 legal masks, from `/1` to `/32`.
    pub fn all_valid_masks() -> Vec<String> {
        LEGAL_MASKS.clone()
    }
}

impl OctetCodec for Mask {
    fn octets(&self) -> Octets {
        self.octets
    }

    fn to_integer(&self) -> u32 {
        mask_bits(self.cidr)
    }
}

impl TryFrom<u8> for Mask {
    type Error = Ipv4Error;

    fn try_from(cidr: u8) -> Result<Self, Self::Error> {
        Mask::from_cidr(cidr)
    }
}

impl TryFrom<&str> for Mask {
    type Error = Ipv4Error;

    fn try_from(mask: &str) -> Result<Self, Self::Error> {
        Mask::from_dotted(mask)
    }
}

impl TryFrom<String> for Mask {
    type Error = Ipv4Error;

    fn try_from(mask: String) -> Result<Self, Self::Error> {
        Mask::from_dotted(&mask)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.octets)
    }
}

impl Serialize for Mask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Mask {
    fn deserialize<D>(deserializer: D) -> Result<Mask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Mask::from_dotted(&s).map_err(de::Error::custom)
    }
}
