//! Dotted-decimal octet codec shared by addresses and masks.
//!
//! Provides [`Octets`], the validated 4-byte form of an IPv4 value, and the
//! [`OctetCodec`] trait that renders it as hex, binary and integer.

use crate::error::Ipv4Error;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Number of octets in an IPv4 value.
pub const OCTET_COUNT: usize = 4;

lazy_static! {
    static ref OCTET_RE: Regex = Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex?");
}

/// Four octets of an IPv4 address or mask, most significant first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Octets([u8; OCTET_COUNT]);

impl Octets {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Octets {
        Octets([a, b, c, d])
    }

    /// Build octets from the 32-bit big-endian value.
    pub const fn from_integer(value: u32) -> Octets {
        Octets(value.to_be_bytes())
    }

    /// Parse a dotted-decimal string such as `"192.168.1.10"`.
    ///
    /// Every part must be 1-3 decimal digits with a value in 0..=255.
    pub fn parse(text: &str) -> Result<Octets, Ipv4Error> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != OCTET_COUNT {
            return Err(Ipv4Error::format(
                text,
                format!("expected {OCTET_COUNT} octets, found {}", parts.len()),
            ));
        }

        let mut bytes = [0u8; OCTET_COUNT];
        for (slot, part) in bytes.iter_mut().zip(parts) {
            if !OCTET_RE.is_match(part) {
                return Err(Ipv4Error::format(text, format!("octet {part:?} is not numeric")));
            }
            *slot = part
                .parse::<u8>()
                .map_err(|_| Ipv4Error::format(text, format!("octet {part} is not in 0..=255")))?;
        }
        log::trace!("parsed {text} into {bytes:?}");
        Ok(Octets(bytes))
    }

    pub const fn bytes(&self) -> [u8; OCTET_COUNT] {
        self.0
    }
}

impl FromStr for Octets {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Octets::parse(s)
    }
}

impl From<u32> for Octets {
    fn from(value: u32) -> Self {
        Octets::from_integer(value)
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

/// Representations derived from a value's four octets.
///
/// Nothing is cached; every call recomputes from [`OctetCodec::octets`].
pub trait OctetCodec {
    fn octets(&self) -> Octets;

    /// Each octet as a 2-digit lowercase hex string.
    fn to_hex_array(&self) -> Vec<String> {
        self.octets()
            .bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    fn to_hex_string(&self) -> String {
        self.to_hex_array().concat()
    }

    /// Each octet as binary digits, without zero padding (`10` is `"1010"`).
    fn to_binary_array(&self) -> Vec<String> {
        self.octets()
            .bytes()
            .iter()
            .map(|b| format!("{b:b}"))
            .collect()
    }

    /// The four octets as a big-endian `u32` (same value as the hex string in base 16).
    fn to_integer(&self) -> u32 {
        u32::from_be_bytes(self.octets().bytes())
    }
}

impl OctetCodec for Octets {
    fn octets(&self) -> Octets {
        *self
    }
}
